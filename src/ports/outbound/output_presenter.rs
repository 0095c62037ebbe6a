use crate::shared::Result;

/// OutputPresenter port for presenting the rendered graph
///
/// Abstracts the destination (stdout, file) of the final text blob.
pub trait OutputPresenter {
    /// Presents the rendered content, followed by a newline when non-empty
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
