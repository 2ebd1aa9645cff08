use std::path::PathBuf;

/// Input DTO for the scan use case.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Project directory containing the go.sum manifest.
    pub project_path: PathBuf,
    /// Vulnerability IDs to drop from the final report.
    pub ignore_ids: Vec<String>,
}

impl ScanRequest {
    pub fn new(project_path: PathBuf, ignore_ids: Vec<String>) -> Self {
        Self {
            project_path,
            ignore_ids,
        }
    }
}
