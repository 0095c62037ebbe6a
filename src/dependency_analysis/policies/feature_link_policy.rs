/// FeatureLinkPolicy decides when feature-scoped dependencies become graph links
///
/// Rules:
/// - `Unfiltered` (default): only when the whole catalog is rendered
/// - `Always`: for the whole catalog and for a filtered closure
/// - `Never`: feature dependencies are not drawn
///
/// Only the DGML grammar draws feature links; text and DOT output ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureLinkPolicy {
    #[default]
    Unfiltered,
    Always,
    Never,
}

impl FeatureLinkPolicy {
    /// Whether feature links are assembled for a graph that is (or is not)
    /// restricted to a dependency closure
    pub fn includes_features(self, filtered: bool) -> bool {
        match self {
            FeatureLinkPolicy::Unfiltered => !filtered,
            FeatureLinkPolicy::Always => true,
            FeatureLinkPolicy::Never => false,
        }
    }
}

impl std::str::FromStr for FeatureLinkPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unfiltered" => Ok(FeatureLinkPolicy::Unfiltered),
            "always" => Ok(FeatureLinkPolicy::Always),
            "never" => Ok(FeatureLinkPolicy::Never),
            _ => Err(format!(
                "Invalid feature link policy: {}. Please specify 'unfiltered', 'always' or 'never'",
                s
            )),
        }
    }
}

impl std::fmt::Display for FeatureLinkPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureLinkPolicy::Unfiltered => write!(f, "unfiltered"),
            FeatureLinkPolicy::Always => write!(f, "always"),
            FeatureLinkPolicy::Never => write!(f, "never"),
        }
    }
}
