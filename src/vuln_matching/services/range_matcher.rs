use crate::vuln_matching::domain::VersionRange;
use semver::Version;

/// RangeMatcher service deciding vulnerability membership for one
/// detected version against one advisory range.
///
/// Boundary semantics are the standard vulnerable-range convention:
/// the introduced bound is inclusive, the fix bound is exclusive.
/// A version equal to the fix is already patched.
pub struct RangeMatcher;

impl RangeMatcher {
    pub fn matches(detected: &Version, range: &VersionRange) -> bool {
        match range {
            VersionRange::Open { introduced } => detected >= introduced,
            VersionRange::Bounded { introduced, fixed } => {
                detected >= introduced && detected < fixed
            }
        }
    }
}
