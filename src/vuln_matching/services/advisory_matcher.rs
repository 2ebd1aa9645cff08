use crate::vuln_matching::domain::{Advisory, Finding, VersionRange};
use crate::vuln_matching::policies::MatchPolicy;
use crate::vuln_matching::services::RangeMatcher;
use semver::Version;
use std::collections::{BTreeMap, HashMap};

/// AdvisoryMatcher service joining resolved dependencies against the
/// advisory corpus.
///
/// Advisories are indexed by package name up front so the join stays
/// near-linear instead of rescanning the full corpus once per
/// dependency. Matching is exact string equality on the module path;
/// anything fuzzier would produce false positives from unrelated
/// packages sharing a short name.
pub struct AdvisoryMatcher {
    policy: MatchPolicy,
}

impl AdvisoryMatcher {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    /// Finds every (dependency, advisory) pair whose first range covers
    /// the resolved version, projected into Finding records.
    ///
    /// Advisories with a missing or malformed range are data-quality
    /// problems in the corpus: they are skipped with a stderr warning
    /// and never abort the pass, so one bad record cannot suppress
    /// valid findings from the rest of the corpus.
    pub fn find(
        &self,
        resolved: &BTreeMap<String, Version>,
        advisories: &[Advisory],
    ) -> Vec<Finding> {
        let by_package = Self::index_by_package(advisories);
        let mut findings = Vec::new();

        for (module, detected) in resolved {
            let Some(candidates) = by_package.get(module.as_str()) else {
                continue;
            };

            for advisory in candidates {
                let Some(first_range) = advisory.ranges.first() else {
                    eprintln!(
                        "Warning: Advisory {} for {} has no ranges, skipping.",
                        advisory.id, module
                    );
                    continue;
                };

                let range = match VersionRange::from_events(&first_range.events) {
                    Ok(range) => range,
                    Err(e) => {
                        eprintln!(
                            "Warning: Advisory {} for {} has an unusable range ({}), skipping.",
                            advisory.id, module, e
                        );
                        continue;
                    }
                };

                if RangeMatcher::matches(detected, &range) {
                    findings.push(self.project(advisory, module, detected, &range));
                }
            }
        }

        findings
    }

    fn index_by_package<'a>(advisories: &'a [Advisory]) -> HashMap<&'a str, Vec<&'a Advisory>> {
        let mut index: HashMap<&str, Vec<&Advisory>> = HashMap::new();
        for advisory in advisories {
            index
                .entry(advisory.package.name.as_str())
                .or_default()
                .push(advisory);
        }
        index
    }

    fn project(
        &self,
        advisory: &Advisory,
        module: &str,
        detected: &Version,
        range: &VersionRange,
    ) -> Finding {
        Finding {
            package: module.to_string(),
            vulnerable_version: range.introduced().to_string(),
            version_detected: detected.to_string(),
            patched_version: range
                .fixed()
                .map(Version::to_string)
                .unwrap_or_default(),
            id: advisory.vulnerability_id().to_string(),
            database: advisory.database.clone(),
            summary: advisory.summary_text(),
            references: advisory.joined_references(),
            source: advisory
                .source_url()
                .unwrap_or(&self.policy.default_source)
                .to_string(),
            severity: advisory
                .severity_label()
                .unwrap_or(&self.policy.default_severity)
                .to_string(),
        }
    }
}
