use crate::shared::Result;
use anyhow::Context;
use semver::Version;

/// A single dependency occurrence as parsed from a go.sum manifest.
///
/// The same logical module may appear multiple times with different
/// versions; version selection collapses those into one entry per
/// module path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyOccurrence {
    namespace: String,
    name: String,
    version: String,
}

impl DependencyOccurrence {
    pub fn new(namespace: String, name: String, version: String) -> Self {
        Self {
            namespace,
            name,
            version,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw version string, possibly carrying a leading `v` and/or a
    /// trailing `+incompatible` marker.
    pub fn raw_version(&self) -> &str {
        &self.version
    }

    /// The full module path identifying this dependency, e.g.
    /// `github.com/gin-gonic/gin`. Advisory matching uses exact string
    /// equality on this path.
    pub fn module_path(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.namespace, self.name)
        }
    }
}

/// Strips Go module decorations from a version string: a leading `v`
/// and a trailing `+incompatible` build marker.
pub fn normalize_version(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix("+incompatible").unwrap_or(trimmed);
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
    trimmed.to_string()
}

/// Parses a version string into a semver Version after normalization.
///
/// OSV range boundaries are sometimes abbreviated (`"0"`, `"1.2"`), so
/// purely numeric versions with fewer than three components are padded
/// with `.0` before parsing. Anything that still fails to parse is an
/// error: silent coercion here would corrupt every downstream range
/// comparison.
pub fn parse_version(raw: &str) -> Result<Version> {
    let normalized = normalize_version(raw);
    if let Ok(version) = Version::parse(&normalized) {
        return Ok(version);
    }
    Version::parse(&pad_components(&normalized))
        .with_context(|| format!("Invalid semantic version: '{}'", raw))
}

/// Pads short numeric versions to major.minor.patch form.
/// Versions carrying pre-release or build segments are left untouched.
fn pad_components(version: &str) -> String {
    if version.is_empty() || !version.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return version.to_string();
    }

    let components = version.split('.').count();
    if components >= 3 {
        return version.to_string();
    }

    let mut padded = version.to_string();
    for _ in components..3 {
        padded.push_str(".0");
    }
    padded
}
