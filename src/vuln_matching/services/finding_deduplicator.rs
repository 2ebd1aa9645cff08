use crate::vuln_matching::domain::Finding;
use crate::vuln_matching::policies::MatchPolicy;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// FindingDeduplicator service collapsing findings that report the
/// same vulnerability from different advisory sources.
///
/// The same vulnerability is frequently published by several databases
/// with slightly different metadata; the trusted database (curated
/// advisory text and reference links) wins when present, otherwise the
/// first finding seen represents the group. Runs in a single pass over
/// the input and preserves first-seen order.
pub struct FindingDeduplicator {
    trusted_database: String,
}

impl FindingDeduplicator {
    pub fn new(policy: &MatchPolicy) -> Self {
        Self {
            trusted_database: policy.trusted_database.clone(),
        }
    }

    pub fn dedupe(&self, findings: Vec<Finding>) -> Vec<Finding> {
        let mut order: Vec<String> = Vec::new();
        let mut representatives: HashMap<String, Finding> = HashMap::new();

        for finding in findings {
            match representatives.entry(finding.id.clone()) {
                Entry::Vacant(entry) => {
                    order.push(finding.id.clone());
                    entry.insert(finding);
                }
                Entry::Occupied(mut entry) => {
                    if entry.get().database != self.trusted_database
                        && finding.database == self.trusted_database
                    {
                        entry.insert(finding);
                    }
                }
            }
        }

        order
            .into_iter()
            .filter_map(|id| representatives.remove(&id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(id: &str, database: &str, summary: &str) -> Finding {
        Finding {
            package: "example.com/foo".to_string(),
            vulnerable_version: "1.0.0".to_string(),
            version_detected: "2.0.0".to_string(),
            patched_version: "3.0.0".to_string(),
            id: id.to_string(),
            database: database.to_string(),
            summary: summary.to_string(),
            references: String::new(),
            source: "https://osv.dev/list".to_string(),
            severity: "MODERATE".to_string(),
        }
    }

    fn deduplicator() -> FindingDeduplicator {
        FindingDeduplicator::new(&MatchPolicy::default())
    }

    #[test]
    fn test_dedupe_empty() {
        assert!(deduplicator().dedupe(vec![]).is_empty());
    }

    #[test]
    fn test_dedupe_distinct_ids_pass_through() {
        let input = vec![
            finding("GHSA-aaaa", "Github Advisory Database", "a"),
            finding("GHSA-bbbb", "Go Vulnerability Database", "b"),
        ];
        let output = deduplicator().dedupe(input.clone());
        assert_eq!(output, input);
    }

    #[test]
    fn test_dedupe_prefers_trusted_database() {
        let input = vec![
            finding("GHSA-aaaa", "Go Vulnerability Database", "go text"),
            finding("GHSA-aaaa", "Github Advisory Database", "github text"),
        ];
        let output = deduplicator().dedupe(input);

        assert_eq!(output.len(), 1);
        assert_eq!(output[0].database, "Github Advisory Database");
        assert_eq!(output[0].summary, "github text");
    }

    #[test]
    fn test_dedupe_prefers_trusted_regardless_of_order() {
        let input = vec![
            finding("GHSA-aaaa", "Github Advisory Database", "github text"),
            finding("GHSA-aaaa", "Go Vulnerability Database", "go text"),
        ];
        let output = deduplicator().dedupe(input);

        assert_eq!(output.len(), 1);
        assert_eq!(output[0].database, "Github Advisory Database");
    }

    #[test]
    fn test_dedupe_without_trusted_keeps_first() {
        let input = vec![
            finding("GHSA-aaaa", "Go Vulnerability Database", "first"),
            finding("GHSA-aaaa", "OSS Index", "second"),
        ];
        let output = deduplicator().dedupe(input);

        assert_eq!(output.len(), 1);
        assert_eq!(output[0].summary, "first");
    }

    #[test]
    fn test_dedupe_preserves_first_seen_order() {
        let input = vec![
            finding("GHSA-cccc", "OSS Index", "c"),
            finding("GHSA-aaaa", "OSS Index", "a"),
            finding("GHSA-cccc", "Github Advisory Database", "c trusted"),
            finding("GHSA-bbbb", "OSS Index", "b"),
        ];
        let output = deduplicator().dedupe(input);

        let ids: Vec<&str> = output.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["GHSA-cccc", "GHSA-aaaa", "GHSA-bbbb"]);
        assert_eq!(output[0].database, "Github Advisory Database");
    }

    #[test]
    fn test_dedupe_is_idempotent() {
        let input = vec![
            finding("GHSA-aaaa", "Go Vulnerability Database", "go"),
            finding("GHSA-aaaa", "Github Advisory Database", "github"),
            finding("GHSA-bbbb", "OSS Index", "b"),
        ];
        let once = deduplicator().dedupe(input);
        let twice = deduplicator().dedupe(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_dedupe_custom_trusted_database() {
        let policy = MatchPolicy::new(
            MatchPolicy::DEFAULT_SOURCE.to_string(),
            MatchPolicy::DEFAULT_SEVERITY.to_string(),
            "Internal Advisory Database".to_string(),
        );
        let input = vec![
            finding("GHSA-aaaa", "Github Advisory Database", "github"),
            finding("GHSA-aaaa", "Internal Advisory Database", "internal"),
        ];
        let output = FindingDeduplicator::new(&policy).dedupe(input);

        assert_eq!(output.len(), 1);
        assert_eq!(output[0].database, "Internal Advisory Database");
    }
}
