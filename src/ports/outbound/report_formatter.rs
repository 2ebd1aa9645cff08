use crate::shared::Result;
use crate::vuln_matching::domain::{Finding, ScanMetadata};

/// ReportFormatter port for rendering scan results
///
/// This port abstracts the output representation (JSON, table) of the
/// deduplicated finding list.
pub trait ReportFormatter {
    /// Formats the findings into the final report string
    ///
    /// # Arguments
    /// * `findings` - Deduplicated findings, every one must appear
    /// * `metadata` - Scan metadata for report headers
    fn format(&self, findings: &[Finding], metadata: &ScanMetadata) -> Result<String>;
}
