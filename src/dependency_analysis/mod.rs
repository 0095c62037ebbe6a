//! Dependency analysis core: the port catalog, the transitive closure and
//! the format-independent graph model.
//!
//! Pure logic only; no I/O happens below this module.
pub mod domain;
pub mod policies;
pub mod services;
