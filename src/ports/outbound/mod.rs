/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod advisory_repository;
pub mod dependency_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use advisory_repository::AdvisoryRepository;
pub use dependency_reader::DependencyReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
