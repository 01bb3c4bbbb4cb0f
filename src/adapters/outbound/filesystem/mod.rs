/// Filesystem adapters for file I/O operations
mod desc_parser;
mod file_writer;
mod local_db_reader;

pub use desc_parser::parse_desc;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use local_db_reader::LocalDatabaseReader;
