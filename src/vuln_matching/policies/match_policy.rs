/// Defaults and source preferences applied while projecting and
/// deduplicating findings.
///
/// Modeled as a value passed into the matching services rather than
/// free constants so tests and the config file can substitute
/// alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchPolicy {
    /// Source URL reported when an advisory carries none.
    pub default_source: String,
    /// Severity reported when an advisory carries none.
    pub default_severity: String,
    /// Database label preferred when several sources report the same
    /// vulnerability.
    pub trusted_database: String,
}

impl MatchPolicy {
    pub const DEFAULT_SOURCE: &'static str = "https://osv.dev/list";
    pub const DEFAULT_SEVERITY: &'static str = "MODERATE";
    pub const TRUSTED_DATABASE: &'static str = "Github Advisory Database";

    pub fn new(default_source: String, default_severity: String, trusted_database: String) -> Self {
        Self {
            default_source,
            default_severity,
            trusted_database,
        }
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_SOURCE.to_string(),
            Self::DEFAULT_SEVERITY.to_string(),
            Self::TRUSTED_DATABASE.to_string(),
        )
    }
}
