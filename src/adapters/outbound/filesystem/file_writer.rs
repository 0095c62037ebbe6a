use crate::ports::outbound::OutputPresenter;
use crate::shared::error::DependInfoError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Appends the trailing newline presenters add to non-empty output
fn terminated(content: &str) -> String {
    if content.is_empty() {
        String::new()
    } else {
        format!("{}\n", content)
    }
}

/// FileSystemWriter adapter for writing the rendered graph to a file
///
/// Used to persist `.dot` / `.dgml` graphs for external viewers.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(DependInfoError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Refuses to write through an existing symbolic link
    fn validate_output_security(&self) -> Result<()> {
        if self.output_path.exists() || self.output_path.is_symlink() {
            validate_not_symlink(&self.output_path, "write").map_err(|e| {
                DependInfoError::SecurityError {
                    path: self.output_path.clone(),
                    reason: e.to_string(),
                    hint: "Choose an output path that is not a symbolic link".to_string(),
                }
            })?;
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        self.validate_output_security()?;

        fs::write(&self.output_path, terminated(content)).map_err(|e| {
            DependInfoError::FileWriteError {
                path: self.output_path.clone(),
                details: e.to_string(),
            }
        })?;

        eprintln!("✅ Output complete: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing the rendered graph to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(terminated(content).as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
