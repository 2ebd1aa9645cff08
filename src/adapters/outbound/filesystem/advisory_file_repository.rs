use crate::ports::outbound::AdvisoryRepository;
use crate::shared::error::ScanError;
use crate::shared::Result;
use crate::vuln_matching::domain::Advisory;
use anyhow::Context;
use std::path::PathBuf;

/// AdvisoryFileRepository adapter reading a materialized advisory
/// corpus from a local JSON file.
///
/// The file holds a JSON array of advisory records in the normalized
/// corpus shape. Useful for offline scans, CI caching, and tests.
pub struct AdvisoryFileRepository {
    corpus_path: PathBuf,
}

impl AdvisoryFileRepository {
    pub fn new(corpus_path: PathBuf) -> Self {
        Self { corpus_path }
    }
}

impl AdvisoryRepository for AdvisoryFileRepository {
    fn fetch_advisories(&self, _modules: &[String]) -> Result<Vec<Advisory>> {
        let content =
            std::fs::read_to_string(&self.corpus_path).map_err(|e| ScanError::FileReadError {
                path: self.corpus_path.clone(),
                details: format!("{}", e),
            })?;

        let advisories: Vec<Advisory> = serde_json::from_str(&content).with_context(|| {
            format!(
                "Failed to parse advisory corpus: {}",
                self.corpus_path.display()
            )
        })?;

        Ok(advisories)
    }
}
