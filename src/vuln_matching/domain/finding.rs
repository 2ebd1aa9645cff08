use serde::{Deserialize, Serialize};

/// A confirmed match between one resolved dependency and one advisory,
/// flattened for reporting.
///
/// Field names and their order are part of the report contract consumed
/// by CI tooling; serde renames pin the user-facing labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(rename = "Package")]
    pub package: String,
    #[serde(rename = "Vulnerable Version")]
    pub vulnerable_version: String,
    #[serde(rename = "Version Detected")]
    pub version_detected: String,
    /// Empty string when the advisory carries no fix boundary.
    #[serde(rename = "Patched Version")]
    pub patched_version: String,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Database")]
    pub database: String,
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(rename = "References")]
    pub references: String,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Severity")]
    pub severity: String,
}
