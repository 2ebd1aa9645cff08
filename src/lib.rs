//! gosum-osv - Vulnerability scanner for Go module dependencies
//!
//! This library scans the dependencies recorded in a `go.sum` file
//! against OSV advisory records, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`vuln_matching`): Pure matching logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use gosum_osv::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let dependency_reader = GoSumReader::new();
//! let advisory_repository = OsvFeedClient::new()?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = ScanModulesUseCase::new(
//!     dependency_reader,
//!     advisory_repository,
//!     progress_reporter,
//!     MatchPolicy::default(),
//! );
//!
//! // Execute
//! let request = ScanRequest::new(PathBuf::from("."), vec![]);
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let formatter = JsonFormatter::new();
//! let output = formatter.format(&response.findings, &response.metadata)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;
pub mod vuln_matching;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        AdvisoryFileRepository, FileSystemWriter, GoSumReader, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TableFormatter};
    pub use crate::adapters::outbound::network::OsvFeedClient;
    pub use crate::application::dto::{ScanRequest, ScanResponse, ScanStatus};
    pub use crate::application::use_cases::ScanModulesUseCase;
    pub use crate::ports::outbound::{
        AdvisoryRepository, DependencyReader, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::{ExitCode, ScanError};
    pub use crate::shared::Result;
    pub use crate::vuln_matching::domain::{
        Advisory, DependencyOccurrence, Finding, ScanMetadata, VersionRange,
    };
    pub use crate::vuln_matching::policies::MatchPolicy;
    pub use crate::vuln_matching::services::{
        AdvisoryMatcher, FindingDeduplicator, RangeMatcher, VersionSelector,
    };
}
