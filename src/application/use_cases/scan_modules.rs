use crate::application::dto::{ScanRequest, ScanResponse};
use crate::ports::outbound::{AdvisoryRepository, DependencyReader, ProgressReporter};
use crate::shared::error::ScanError;
use crate::shared::Result;
use crate::vuln_matching::domain::{Finding, ScanMetadata};
use crate::vuln_matching::policies::MatchPolicy;
use crate::vuln_matching::services::{AdvisoryMatcher, FindingDeduplicator, VersionSelector};
use std::collections::HashSet;

/// ScanModulesUseCase - Core use case for vulnerability scanning
///
/// Orchestrates the scan workflow over injected ports: parse the
/// dependency manifest, resolve one version per module, obtain the
/// advisory corpus, match, deduplicate, and apply the ignore list.
///
/// Fatal input errors (no dependencies, malformed dependency versions,
/// unobtainable corpus) surface before any matching work begins;
/// per-record corpus problems are absorbed inside the matcher.
///
/// # Type Parameters
/// * `DR` - DependencyReader implementation
/// * `AR` - AdvisoryRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct ScanModulesUseCase<DR, AR, PR> {
    dependency_reader: DR,
    advisory_repository: AR,
    progress_reporter: PR,
    policy: MatchPolicy,
}

impl<DR, AR, PR> ScanModulesUseCase<DR, AR, PR>
where
    DR: DependencyReader,
    AR: AdvisoryRepository,
    PR: ProgressReporter,
{
    /// Creates a new ScanModulesUseCase with injected dependencies
    pub fn new(
        dependency_reader: DR,
        advisory_repository: AR,
        progress_reporter: PR,
        policy: MatchPolicy,
    ) -> Self {
        Self {
            dependency_reader,
            advisory_repository,
            progress_reporter,
            policy,
        }
    }

    /// Executes the scan
    ///
    /// # Returns
    /// ScanResponse carrying the deduplicated findings and scan metadata.
    /// An empty finding list is the success path, not an error.
    pub fn execute(&self, request: ScanRequest) -> Result<ScanResponse> {
        // Step 1: Parse the manifest; an empty dependency set is a scan
        // infrastructure failure, not a clean result
        let occurrences = self.read_occurrences(&request)?;

        // Step 2: Resolve one effective version per module
        let resolved = VersionSelector::resolve(&occurrences)?;
        self.progress_reporter.report(&format!(
            "✅ Resolved {} module(s) from {} occurrence(s)",
            resolved.len(),
            occurrences.len()
        ));

        // Step 3: Obtain the advisory corpus
        let modules: Vec<String> = resolved.keys().cloned().collect();
        let advisories = self
            .advisory_repository
            .fetch_advisories(&modules)
            .map_err(|e| ScanError::AdvisoryCorpusError {
                details: format!("{}", e),
            })?;
        self.progress_reporter.report(&format!(
            "✅ Loaded {} advisory record(s)",
            advisories.len()
        ));

        // Step 4: Match and deduplicate
        let matcher = AdvisoryMatcher::new(self.policy.clone());
        let raw_findings = matcher.find(&resolved, &advisories);
        let deduplicator = FindingDeduplicator::new(&self.policy);
        let findings = deduplicator.dedupe(raw_findings);

        // Step 5: Apply the ignore list
        let findings = self.apply_ignore_list(findings, &request.ignore_ids);

        let metadata = ScanMetadata::now(resolved.len(), advisories.len());
        Ok(ScanResponse::new(findings, metadata))
    }

    fn read_occurrences(
        &self,
        request: &ScanRequest,
    ) -> Result<Vec<crate::vuln_matching::domain::DependencyOccurrence>> {
        self.progress_reporter.report(&format!(
            "📖 Reading go.sum from: {}",
            request.project_path.display()
        ));

        let occurrences = self
            .dependency_reader
            .read_dependencies(&request.project_path)?;

        if occurrences.is_empty() {
            return Err(ScanError::NoDependencies {
                path: request.project_path.join("go.sum"),
            }
            .into());
        }

        Ok(occurrences)
    }

    fn apply_ignore_list(&self, findings: Vec<Finding>, ignore_ids: &[String]) -> Vec<Finding> {
        if ignore_ids.is_empty() {
            return findings;
        }

        let ignored: HashSet<&str> = ignore_ids.iter().map(String::as_str).collect();
        let original_count = findings.len();
        let kept: Vec<Finding> = findings
            .into_iter()
            .filter(|finding| !ignored.contains(finding.id.as_str()))
            .collect();

        let dropped = original_count - kept.len();
        if dropped > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Ignored {} finding(s) listed in the ignore configuration",
                dropped
            ));
        }

        kept
    }
}
