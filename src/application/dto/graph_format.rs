/// Output grammar for the dependency graph
///
/// Shared by the CLI (inbound adapter), the config file and the renderer
/// factory, so it lives in the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphFormat {
    /// `name: dep1, dep2` lines (default)
    #[default]
    PlainText,
    /// Graphviz DOT digraph
    Dot,
    /// Directed Graph Markup Language (XML)
    Dgml,
}

impl GraphFormat {
    /// Format picked by the `--dot` / `--dgml` switches, if any
    ///
    /// DOT is checked first, so it wins when both switches are set.
    pub fn selected_by(dot: bool, dgml: bool) -> Option<Self> {
        if dot {
            Some(GraphFormat::Dot)
        } else if dgml {
            Some(GraphFormat::Dgml)
        } else {
            None
        }
    }

    /// Like `selected_by`, falling back to plain text
    pub fn from_switches(dot: bool, dgml: bool) -> Self {
        Self::selected_by(dot, dgml).unwrap_or_default()
    }
}

impl std::str::FromStr for GraphFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(GraphFormat::PlainText),
            "dot" => Ok(GraphFormat::Dot),
            "dgml" => Ok(GraphFormat::Dgml),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text', 'dot' or 'dgml'",
                s
            )),
        }
    }
}

impl std::fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphFormat::PlainText => write!(f, "text"),
            GraphFormat::Dot => write!(f, "dot"),
            GraphFormat::Dgml => write!(f, "dgml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_no_switch_selects_plain_text() {
        assert_eq!(GraphFormat::selected_by(false, false), None);
        assert_eq!(GraphFormat::from_switches(false, false), GraphFormat::PlainText);
    }

    #[test]
    fn test_single_switches() {
        assert_eq!(GraphFormat::from_switches(true, false), GraphFormat::Dot);
        assert_eq!(GraphFormat::from_switches(false, true), GraphFormat::Dgml);
    }

    #[test]
    fn test_dot_takes_precedence_over_dgml() {
        assert_eq!(GraphFormat::from_switches(true, true), GraphFormat::Dot);
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(GraphFormat::from_str("text").unwrap(), GraphFormat::PlainText);
        assert_eq!(GraphFormat::from_str("TXT").unwrap(), GraphFormat::PlainText);
        assert_eq!(GraphFormat::from_str("plain").unwrap(), GraphFormat::PlainText);
        assert_eq!(GraphFormat::from_str("Dot").unwrap(), GraphFormat::Dot);
        assert_eq!(GraphFormat::from_str("DGML").unwrap(), GraphFormat::Dgml);
    }

    #[test]
    fn test_from_str_invalid() {
        let error = GraphFormat::from_str("svg").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("svg"));
        assert!(GraphFormat::from_str("").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(GraphFormat::PlainText.to_string(), "text");
        assert_eq!(GraphFormat::Dot.to_string(), "dot");
        assert_eq!(GraphFormat::Dgml.to_string(), "dgml");
    }
}
