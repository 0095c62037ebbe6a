use crate::shared::Result;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// NewType wrapper for a port name with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            anyhow::bail!(
                "Package name '{}' contains invalid characters. Only ASCII alphanumerics, hyphens, underscores and dots are allowed.",
                name
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference from one package to another.
///
/// The referenced name may not exist in the catalog; such references stay
/// in the graph as dangling edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    name: PackageName,
    features: Vec<String>,
    platform: Option<String>,
}

impl Dependency {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: PackageName::new(name.to_string())?,
            features: Vec::new(),
            platform: None,
        })
    }

    /// Parses `name` or `name[feature1,feature2]`.
    pub fn parse(spec: &str) -> Result<Self> {
        let spec = spec.trim();
        let Some(open) = spec.find('[') else {
            return Self::new(spec);
        };

        let Some(inner) = spec[open + 1..].strip_suffix(']') else {
            anyhow::bail!("Unterminated feature list in dependency '{}'", spec);
        };

        let features = inner
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(String::from)
            .collect();

        Ok(Self::new(spec[..open].trim())?.with_features(features))
    }

    pub fn with_features(mut self, features: Vec<String>) -> Self {
        self.features = features;
        self
    }

    pub fn with_platform(mut self, platform: Option<String>) -> Self {
        self.platform = platform;
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }
}

/// Named optional feature of a package with its own dependency list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    name: String,
    dependencies: Vec<Dependency>,
}

impl Feature {
    pub fn new(name: String, dependencies: Vec<Dependency>) -> Self {
        Self { name, dependencies }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }
}

/// One port of the catalog, as read from its manifest.
///
/// Records are read-only once the loader has built them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    name: PackageName,
    dependencies: Vec<Dependency>,
    features: Vec<Feature>,
}

impl PackageRecord {
    pub fn new(name: PackageName, dependencies: Vec<Dependency>, features: Vec<Feature>) -> Self {
        Self {
            name,
            dependencies,
            features,
        }
    }

    /// Builds a record from plain names; handy for catalogs assembled in code.
    pub fn from_names(name: &str, dependencies: &[&str]) -> Result<Self> {
        let dependencies = dependencies
            .iter()
            .map(|dep| Dependency::parse(dep))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(
            PackageName::new(name.to_string())?,
            dependencies,
            Vec::new(),
        ))
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Direct dependency names in declared order, duplicates kept
    pub fn dependency_names(&self) -> Vec<String> {
        self.dependencies
            .iter()
            .map(|dep| dep.name().to_string())
            .collect()
    }

    /// Dependency names of every feature, feature by feature in declared order
    pub fn feature_dependency_names(&self) -> Vec<String> {
        self.features
            .iter()
            .flat_map(|feature| feature.dependencies())
            .map(|dep| dep.name().to_string())
            .collect()
    }
}
