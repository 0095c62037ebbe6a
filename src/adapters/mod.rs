/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: the ports-directory
/// reader, output presenters, the stderr progress reporter and the graph
/// renderers. The CLI (the inbound adapter) lives in the binary.
pub mod outbound;
