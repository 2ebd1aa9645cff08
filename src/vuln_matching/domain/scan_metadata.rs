/// ScanMetadata value object describing one scan invocation.
#[derive(Debug, Clone)]
pub struct ScanMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    modules_scanned: usize,
    advisories_checked: usize,
}

impl ScanMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        modules_scanned: usize,
        advisories_checked: usize,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            modules_scanned,
            advisories_checked,
        }
    }

    /// Builds metadata stamped with the current time and this crate's
    /// name and version.
    pub fn now(modules_scanned: usize, advisories_checked: usize) -> Self {
        Self::new(
            chrono::Utc::now().to_rfc3339(),
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
            modules_scanned,
            advisories_checked,
        )
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn modules_scanned(&self) -> usize {
        self.modules_scanned
    }

    pub fn advisories_checked(&self) -> usize {
        self.advisories_checked
    }
}
