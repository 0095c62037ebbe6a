mod closure_builder;
mod graph_assembler;

pub use closure_builder::ClosureBuilder;
pub use graph_assembler::GraphAssembler;
