use crate::vuln_matching::domain::{Finding, ScanMetadata};

/// Outcome of a completed scan.
///
/// A scan that runs to completion is either clean or has findings;
/// infrastructure failures never produce a response at all, so "broken
/// scan" and "clean scan" cannot be confused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    /// No vulnerabilities were found.
    Success,
    /// One or more vulnerabilities were found.
    VulnerabilitiesDetected,
}

/// Output DTO for the scan use case.
#[derive(Debug, Clone)]
pub struct ScanResponse {
    pub findings: Vec<Finding>,
    pub metadata: ScanMetadata,
}

impl ScanResponse {
    pub fn new(findings: Vec<Finding>, metadata: ScanMetadata) -> Self {
        Self { findings, metadata }
    }

    pub fn status(&self) -> ScanStatus {
        if self.findings.is_empty() {
            ScanStatus::Success
        } else {
            ScanStatus::VulnerabilitiesDetected
        }
    }
}
