use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use crate::vuln_matching::domain::{Finding, ScanMetadata};
use anyhow::Context;

/// JsonFormatter adapter rendering findings as a pretty-printed JSON
/// array.
///
/// This is the machine-readable report surface: field names and order
/// come straight from the Finding serde contract, so CI tooling can
/// parse the output without caring about tool versions.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, findings: &[Finding], _metadata: &ScanMetadata) -> Result<String> {
        serde_json::to_string_pretty(findings).context("Failed to serialize findings to JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(id: &str) -> Finding {
        Finding {
            package: "example.com/foo".to_string(),
            vulnerable_version: "1.0.0".to_string(),
            version_detected: "2.0.0".to_string(),
            patched_version: "3.0.0".to_string(),
            id: id.to_string(),
            database: "Github Advisory Database".to_string(),
            summary: "Test vulnerability".to_string(),
            references: "https://example.com/a".to_string(),
            source: "https://osv.dev/list".to_string(),
            severity: "MODERATE".to_string(),
        }
    }

    #[test]
    fn test_format_empty_findings() {
        let output = JsonFormatter::new()
            .format(&[], &ScanMetadata::now(0, 0))
            .unwrap();
        assert_eq!(output, "[]");
    }

    #[test]
    fn test_format_renders_report_field_names() {
        let output = JsonFormatter::new()
            .format(&[finding("GHSA-xxxx")], &ScanMetadata::now(1, 1))
            .unwrap();

        assert!(output.contains("\"Package\": \"example.com/foo\""));
        assert!(output.contains("\"Vulnerable Version\": \"1.0.0\""));
        assert!(output.contains("\"Version Detected\": \"2.0.0\""));
        assert!(output.contains("\"Patched Version\": \"3.0.0\""));
        assert!(output.contains("\"ID\": \"GHSA-xxxx\""));
    }

    #[test]
    fn test_format_output_is_parseable() {
        let findings = vec![finding("GHSA-xxxx"), finding("GHSA-yyyy")];
        let output = JsonFormatter::new()
            .format(&findings, &ScanMetadata::now(2, 2))
            .unwrap();

        let parsed: Vec<Finding> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, findings);
    }
}
