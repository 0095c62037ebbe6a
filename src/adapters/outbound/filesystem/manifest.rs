//! `port.toml` schema and its conversion into domain records.

use crate::dependency_analysis::domain::{Dependency, Feature, PackageName, PackageRecord};
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PortManifest {
    name: String,
    #[serde(default)]
    dependencies: Vec<DependencySpec>,
    #[serde(default, rename = "feature")]
    features: Vec<FeatureManifest>,
}

#[derive(Debug, Deserialize)]
struct FeatureManifest {
    name: String,
    #[serde(default)]
    dependencies: Vec<DependencySpec>,
}

/// `"zlib"`, `"curl[ssl]"` or `{ name = "winsock", platform = "windows" }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DependencySpec {
    Short(String),
    Detailed {
        name: String,
        #[serde(default)]
        features: Vec<String>,
        #[serde(default)]
        platform: Option<String>,
    },
}

impl DependencySpec {
    fn into_dependency(self) -> Result<Dependency> {
        match self {
            DependencySpec::Short(spec) => Dependency::parse(&spec),
            DependencySpec::Detailed {
                name,
                features,
                platform,
            } => Ok(Dependency::new(&name)?
                .with_features(features)
                .with_platform(platform)),
        }
    }
}

fn convert_dependencies(specs: Vec<DependencySpec>) -> Result<Vec<Dependency>> {
    specs
        .into_iter()
        .map(DependencySpec::into_dependency)
        .collect()
}

/// Parses the content of a `port.toml` manifest
///
/// Keys other than `name`, `dependencies` and `[[feature]]` are ignored.
///
/// # Errors
/// Returns an error if the TOML is malformed, `name` is missing, or a
/// package name is not valid.
pub fn parse_manifest(content: &str) -> Result<PackageRecord> {
    let manifest: PortManifest = toml::from_str(content).context("Invalid port manifest TOML")?;

    let name = PackageName::new(manifest.name)?;
    let dependencies = convert_dependencies(manifest.dependencies)
        .with_context(|| format!("Invalid dependency in port '{}'", name))?;

    let mut features = Vec::with_capacity(manifest.features.len());
    for feature in manifest.features {
        let feature_dependencies = convert_dependencies(feature.dependencies).with_context(|| {
            format!(
                "Invalid dependency in feature '{}' of port '{}'",
                feature.name, name
            )
        })?;
        features.push(Feature::new(feature.name, feature_dependencies));
    }

    Ok(PackageRecord::new(name, dependencies, features))
}
