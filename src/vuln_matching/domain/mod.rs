pub mod advisory;
pub mod dependency;
pub mod finding;
pub mod scan_metadata;

pub use advisory::{
    Advisory, AdvisoryPackage, AdvisoryRange, AdvisoryReference, DatabaseSpecific, RangeEvent,
    VersionRange,
};
pub use dependency::{normalize_version, parse_version, DependencyOccurrence};
pub use finding::Finding;
pub use scan_metadata::ScanMetadata;
