use crate::shared::Result;
use crate::vuln_matching::domain::dependency::parse_version;
use semver::Version;
use serde::{Deserialize, Serialize};

/// One advisory record from the corpus, keyed by package identity.
///
/// The corpus is assumed to be already deserialized from whatever wire
/// format the advisory feed uses (see the AdvisoryRepository port).
/// Optional metadata fields carry explicit fallbacks rather than being
/// accessed dynamically, so the projection into a Finding is statically
/// checkable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advisory {
    pub id: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub package: AdvisoryPackage,
    #[serde(default)]
    pub ranges: Vec<AdvisoryRange>,
    pub database: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub references: Vec<AdvisoryReference>,
    #[serde(default)]
    pub database_specific: Option<DatabaseSpecific>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryPackage {
    pub name: String,
    #[serde(default)]
    pub ecosystem: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryRange {
    #[serde(default)]
    pub events: Vec<RangeEvent>,
}

/// A raw boundary marker within an advisory range. Exactly one of the
/// two fields is expected to be set per event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduced: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryReference {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSpecific {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
}

impl Advisory {
    /// The vulnerability ID used for reporting and deduplication:
    /// the first alias when aliases exist, the advisory's own id otherwise.
    pub fn vulnerability_id(&self) -> &str {
        self.aliases.first().map(String::as_str).unwrap_or(&self.id)
    }

    /// Human-readable summary, falling back to the details field.
    pub fn summary_text(&self) -> String {
        self.summary
            .as_deref()
            .or(self.details.as_deref())
            .unwrap_or_default()
            .trim()
            .to_string()
    }

    /// Comma-joined reference URLs.
    pub fn joined_references(&self) -> String {
        self.references
            .iter()
            .map(|reference| reference.url.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn source_url(&self) -> Option<&str> {
        self.database_specific
            .as_ref()
            .and_then(|db| db.url.as_deref())
    }

    pub fn severity_label(&self) -> Option<&str> {
        self.database_specific
            .as_ref()
            .and_then(|db| db.severity.as_deref())
    }
}

/// A vulnerable version range with explicit shape.
///
/// The corpus encodes ranges as ordered event lists; only two shapes
/// occur in practice. Making the shape a tagged variant turns the
/// matching policy into a pattern match and makes any other event-list
/// shape an explicit construction error instead of a silent fallthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionRange {
    /// No known fix: vulnerable for all versions >= introduced.
    Open { introduced: Version },
    /// Known fix: vulnerable for versions in [introduced, fixed).
    Bounded { introduced: Version, fixed: Version },
}

impl VersionRange {
    /// Builds a range from an advisory's ordered event list.
    ///
    /// # Errors
    /// Returns an error for event lists that are not `[introduced]` or
    /// `[introduced, fixed]`, and for boundary versions that fail to
    /// parse. Callers treat these as per-record data-quality errors.
    pub fn from_events(events: &[RangeEvent]) -> Result<Self> {
        match events {
            [first] => {
                let introduced = required_boundary(first.introduced.as_deref(), "introduced")?;
                Ok(VersionRange::Open { introduced })
            }
            [first, second] => {
                let introduced = required_boundary(first.introduced.as_deref(), "introduced")?;
                let fixed = required_boundary(second.fixed.as_deref(), "fixed")?;
                Ok(VersionRange::Bounded { introduced, fixed })
            }
            other => anyhow::bail!(
                "Unsupported range shape: expected 1 or 2 events, found {}",
                other.len()
            ),
        }
    }

    pub fn introduced(&self) -> &Version {
        match self {
            VersionRange::Open { introduced } => introduced,
            VersionRange::Bounded { introduced, .. } => introduced,
        }
    }

    /// The fix boundary, if one is known.
    pub fn fixed(&self) -> Option<&Version> {
        match self {
            VersionRange::Open { .. } => None,
            VersionRange::Bounded { fixed, .. } => Some(fixed),
        }
    }
}

fn required_boundary(value: Option<&str>, field: &str) -> Result<Version> {
    let raw = value
        .ok_or_else(|| anyhow::anyhow!("Range event is missing the '{}' boundary", field))?;
    parse_version(raw)
}
