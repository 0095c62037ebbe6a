/// Filesystem adapters for catalog loading and output files
mod file_reader;
mod file_writer;
mod manifest;

pub use file_reader::{PortsDirectoryReader, MANIFEST_FILENAME};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use manifest::parse_manifest;
