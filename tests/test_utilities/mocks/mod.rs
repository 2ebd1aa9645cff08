/// Mock implementations for testing
mod mock_advisory_repository;
mod mock_dependency_reader;
mod mock_progress_reporter;

pub use mock_advisory_repository::MockAdvisoryRepository;
pub use mock_dependency_reader::MockDependencyReader;
pub use mock_progress_reporter::MockProgressReporter;
