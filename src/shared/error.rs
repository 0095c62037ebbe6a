use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Rendering never fails once the catalog is loaded, so anything other than
/// `Success` comes from loading, configuration or output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The graph was rendered and presented
    Success = 0,
    /// Catalog, manifest, config or output failure
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Errors raised around the dependency core: loading the port catalog,
/// reading configuration and writing the rendered graph.
///
/// The closure builder and the renderers never produce these; unresolved
/// names and cycles degrade to "missing from output" instead.
#[derive(Debug, Error)]
pub enum DependInfoError {
    #[error("Port catalog not found: {path}\n\n💡 Hint: {suggestion}")]
    CatalogNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse port manifest: {path}\nDetails: {details}\n\n💡 Hint: Please verify that port.toml has a valid `name` and `dependencies` list")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {path}\nDetails: {details}\n\n💡 Hint: {hint}")]
    ConfigError {
        path: PathBuf,
        details: String,
        hint: String,
    },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
