pub mod advisory_matcher;
pub mod finding_deduplicator;
pub mod range_matcher;
pub mod version_selector;

pub use advisory_matcher::AdvisoryMatcher;
pub use finding_deduplicator::FindingDeduplicator;
pub use range_matcher::RangeMatcher;
pub use version_selector::VersionSelector;
