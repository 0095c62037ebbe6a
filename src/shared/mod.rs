//! Cross-cutting helpers shared by every layer: error types, the crate-wide
//! `Result` alias and the file-safety checks used by the filesystem adapters.
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
