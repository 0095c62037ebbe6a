use clap::Parser;
use std::path::PathBuf;

use depend_info::application::dto::{DependInfoRequest, GraphFormat};
use depend_info::config::Settings;
use depend_info::dependency_analysis::policies::FeatureLinkPolicy;

/// Catalog location used when neither `--ports` nor the config file names one
pub const DEFAULT_PORTS_DIR: &str = "ports";

/// Show the transitive dependencies of ports as text, DOT or DGML
#[derive(Parser, Debug)]
#[command(name = "depend-info")]
#[command(version)]
#[command(
    about = "Show the transitive dependencies of ports as text, DOT or DGML",
    long_about = None
)]
pub struct Args {
    /// Ports whose dependency closure is shown (whole catalog if omitted)
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Render the graph as a Graphviz DOT digraph
    #[arg(long)]
    pub dot: bool,

    /// Render the graph as DGML (wins only when --dot is not given)
    #[arg(long)]
    pub dgml: bool,

    /// Directory holding one subdirectory per port (defaults to ./ports)
    #[arg(short, long, value_name = "DIR")]
    pub ports: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./depend-info.config.yml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// When feature dependencies are drawn as links: unfiltered, always or never
    #[arg(long, value_name = "POLICY")]
    pub feature_links: Option<FeatureLinkPolicy>,
}

/// Options after merging CLI flags, config file and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub catalog_root: PathBuf,
    pub packages: Vec<String>,
    pub format: GraphFormat,
    pub feature_links: FeatureLinkPolicy,
    pub output: Option<PathBuf>,
}

impl Invocation {
    pub fn to_request(&self) -> DependInfoRequest {
        DependInfoRequest::new(self.catalog_root.clone(), self.packages.clone())
            .with_feature_links(self.feature_links)
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Merges with config settings: CLI flag > config file > built-in default
    pub fn resolve(self, settings: Settings) -> Invocation {
        let format = GraphFormat::selected_by(self.dot, self.dgml)
            .or(settings.format)
            .unwrap_or_default();

        let catalog_root = self
            .ports
            .or(settings.ports)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PORTS_DIR));

        let feature_links = self
            .feature_links
            .or(settings.feature_links)
            .unwrap_or_default();

        Invocation {
            catalog_root,
            packages: self.packages,
            format,
            feature_links,
            output: self.output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("depend-info").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let invocation = parse(&[]).resolve(Settings::default());

        assert_eq!(invocation.catalog_root, PathBuf::from("ports"));
        assert!(invocation.packages.is_empty());
        assert_eq!(invocation.format, GraphFormat::PlainText);
        assert_eq!(invocation.feature_links, FeatureLinkPolicy::Unfiltered);
        assert!(invocation.output.is_none());
    }

    #[test]
    fn test_packages_are_kept_in_order() {
        let invocation = parse(&["zlib", "curl", "zlib"]).resolve(Settings::default());
        assert_eq!(invocation.packages, vec!["zlib", "curl", "zlib"]);
    }

    #[test]
    fn test_dot_wins_over_dgml() {
        let invocation = parse(&["--dgml", "--dot"]).resolve(Settings::default());
        assert_eq!(invocation.format, GraphFormat::Dot);
    }

    #[test]
    fn test_switch_overrides_config_format() {
        let settings = Settings {
            format: Some(GraphFormat::Dot),
            ..Settings::default()
        };
        let invocation = parse(&["--dgml"]).resolve(settings);
        assert_eq!(invocation.format, GraphFormat::Dgml);
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let settings = Settings {
            ports: Some(PathBuf::from("vendor/ports")),
            format: Some(GraphFormat::Dgml),
            feature_links: Some(FeatureLinkPolicy::Never),
        };
        let invocation = parse(&["curl"]).resolve(settings);

        assert_eq!(invocation.catalog_root, PathBuf::from("vendor/ports"));
        assert_eq!(invocation.format, GraphFormat::Dgml);
        assert_eq!(invocation.feature_links, FeatureLinkPolicy::Never);
    }

    #[test]
    fn test_flags_override_config() {
        let settings = Settings {
            ports: Some(PathBuf::from("vendor/ports")),
            format: None,
            feature_links: Some(FeatureLinkPolicy::Never),
        };
        let invocation =
            parse(&["-p", "my/ports", "--feature-links", "always"]).resolve(settings);

        assert_eq!(invocation.catalog_root, PathBuf::from("my/ports"));
        assert_eq!(invocation.feature_links, FeatureLinkPolicy::Always);
    }

    #[test]
    fn test_invalid_feature_links_rejected() {
        let result = Args::try_parse_from(["depend-info", "--feature-links", "sometimes"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_to_request() {
        let invocation = parse(&["curl", "--feature-links", "never"]).resolve(Settings::default());
        let request = invocation.to_request();

        assert_eq!(request.catalog_root, PathBuf::from("ports"));
        assert_eq!(request.packages, vec!["curl"]);
        assert_eq!(request.feature_links, FeatureLinkPolicy::Never);
        assert!(request.is_filtered());
    }
}
