use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use crate::vuln_matching::domain::{Finding, ScanMetadata};
use owo_colors::OwoColorize;

/// Markdown table header for findings
const TABLE_HEADER: &str =
    "| Package | Version Detected | Vulnerable Range | Patched | Severity | ID | Database |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str =
    "|---------|------------------|------------------|---------|----------|----|----------|\n";

/// TableFormatter adapter rendering findings as a human-readable
/// Markdown table with a short per-finding detail section.
///
/// Severity labels are colorized for terminal display.
pub struct TableFormatter;

impl TableFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe table rendering
    fn escape_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn colorize_severity(severity: &str) -> String {
        match severity.to_uppercase().as_str() {
            "CRITICAL" => severity.red().bold().to_string(),
            "HIGH" => severity.red().to_string(),
            "MODERATE" | "MEDIUM" => severity.yellow().to_string(),
            "LOW" => severity.green().to_string(),
            _ => severity.to_string(),
        }
    }

    fn vulnerable_range(finding: &Finding) -> String {
        if finding.patched_version.is_empty() {
            format!(">= {}", finding.vulnerable_version)
        } else {
            format!(
                ">= {}, < {}",
                finding.vulnerable_version, finding.patched_version
            )
        }
    }

    fn render_header(&self, output: &mut String, metadata: &ScanMetadata) {
        output.push_str("# Vulnerability Scan Report\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {}\n\n",
            metadata.tool_name(),
            metadata.tool_version(),
            metadata.timestamp()
        ));
        output.push_str(&format!(
            "Scanned {} module(s) against {} advisory record(s).\n\n",
            metadata.modules_scanned(),
            metadata.advisories_checked()
        ));
    }

    fn render_table(&self, output: &mut String, findings: &[Finding]) {
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for finding in findings {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                Self::escape_table_cell(&finding.package),
                finding.version_detected,
                Self::vulnerable_range(finding),
                if finding.patched_version.is_empty() {
                    "no fix"
                } else {
                    finding.patched_version.as_str()
                },
                Self::colorize_severity(&finding.severity),
                finding.id,
                Self::escape_table_cell(&finding.database),
            ));
        }
    }

    fn render_details(&self, output: &mut String, findings: &[Finding]) {
        output.push_str("\n## Details\n");

        for finding in findings {
            output.push_str(&format!("\n### {}\n\n", finding.id));
            if !finding.summary.is_empty() {
                output.push_str(&format!("{}\n\n", Self::escape_table_cell(&finding.summary)));
            }
            output.push_str(&format!("- Source: {}\n", finding.source));
            if !finding.references.is_empty() {
                output.push_str(&format!("- References: {}\n", finding.references));
            }
        }
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TableFormatter {
    fn format(&self, findings: &[Finding], metadata: &ScanMetadata) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, metadata);

        if findings.is_empty() {
            output.push_str("No known vulnerabilities were found.\n");
            return Ok(output);
        }

        self.render_table(&mut output, findings);
        self.render_details(&mut output, findings);
        Ok(output)
    }
}
