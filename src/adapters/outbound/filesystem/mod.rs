pub mod advisory_file_repository;
pub mod file_writer;
pub mod gosum_reader;

pub use advisory_file_repository::AdvisoryFileRepository;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use gosum_reader::GoSumReader;
