use crate::shared::Result;
use crate::vuln_matching::domain::{parse_version, DependencyOccurrence};
use anyhow::Context;
use semver::Version;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// VersionSelector service resolving one effective version per module.
///
/// A go.sum manifest frequently lists several versions of the same
/// module. When that happens the highest version wins, since that is
/// the version Go's minimal version selection would actually build
/// with. Pure logic, no I/O.
pub struct VersionSelector;

impl VersionSelector {
    /// Resolves raw occurrences into a map of module path to selected
    /// version. Iteration order of the result is sorted by module path,
    /// which keeps downstream report output deterministic.
    ///
    /// An empty input yields an empty map; rejecting that situation is
    /// the caller's responsibility.
    ///
    /// # Errors
    /// Returns an error on the first occurrence whose version string is
    /// not valid semver. Version ordering is the foundation of every
    /// range comparison, so malformed input must fail the scan rather
    /// than be skipped.
    pub fn resolve(occurrences: &[DependencyOccurrence]) -> Result<BTreeMap<String, Version>> {
        let mut resolved = BTreeMap::new();

        for occurrence in occurrences {
            let module = occurrence.module_path();
            let version = parse_version(occurrence.raw_version())
                .with_context(|| format!("Dependency '{}' has an invalid version", module))?;

            match resolved.entry(module) {
                Entry::Vacant(entry) => {
                    entry.insert(version);
                }
                Entry::Occupied(mut entry) => {
                    if version > *entry.get() {
                        entry.insert(version);
                    }
                }
            }
        }

        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occurrence(namespace: &str, name: &str, version: &str) -> DependencyOccurrence {
        DependencyOccurrence::new(namespace.to_string(), name.to_string(), version.to_string())
    }

    #[test]
    fn test_resolve_single_occurrence() {
        let occurrences = vec![occurrence("example.com", "foo", "v1.0.0")];
        let resolved = VersionSelector::resolve(&occurrences).unwrap();

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved["example.com/foo"], Version::new(1, 0, 0));
    }

    #[test]
    fn test_resolve_picks_highest_version() {
        let occurrences = vec![
            occurrence("example.com", "foo", "v1.0.0"),
            occurrence("example.com", "foo", "v2.0.0"),
        ];
        let resolved = VersionSelector::resolve(&occurrences).unwrap();

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved["example.com/foo"], Version::new(2, 0, 0));
    }

    #[test]
    fn test_resolve_is_order_independent() {
        let forward = vec![
            occurrence("example.com", "foo", "v1.2.0"),
            occurrence("example.com", "foo", "v3.0.1"),
            occurrence("example.com", "foo", "v2.5.0"),
        ];
        let reversed: Vec<_> = forward.iter().rev().cloned().collect();

        let resolved_forward = VersionSelector::resolve(&forward).unwrap();
        let resolved_reversed = VersionSelector::resolve(&reversed).unwrap();

        assert_eq!(resolved_forward, resolved_reversed);
        assert_eq!(resolved_forward["example.com/foo"], Version::new(3, 0, 1));
    }

    #[test]
    fn test_resolve_normalizes_incompatible_marker() {
        let occurrences = vec![
            occurrence("example.com", "foo", "v1.9.0"),
            occurrence("example.com", "foo", "v2.0.0+incompatible"),
        ];
        let resolved = VersionSelector::resolve(&occurrences).unwrap();

        assert_eq!(resolved["example.com/foo"], Version::new(2, 0, 0));
    }

    #[test]
    fn test_resolve_keeps_distinct_modules() {
        let occurrences = vec![
            occurrence("example.com", "foo", "v1.0.0"),
            occurrence("example.com", "bar", "v0.4.2"),
        ];
        let resolved = VersionSelector::resolve(&occurrences).unwrap();

        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved["example.com/foo"], Version::new(1, 0, 0));
        assert_eq!(resolved["example.com/bar"], Version::new(0, 4, 2));
    }

    #[test]
    fn test_resolve_empty_input_yields_empty_map() {
        let resolved = VersionSelector::resolve(&[]).unwrap();
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_resolve_malformed_version_is_error() {
        let occurrences = vec![
            occurrence("example.com", "foo", "v1.0.0"),
            occurrence("example.com", "bar", "garbage"),
        ];
        let result = VersionSelector::resolve(&occurrences);

        assert!(result.is_err());
        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("example.com/bar"));
    }

    #[test]
    fn test_resolve_prerelease_below_release() {
        let occurrences = vec![
            occurrence("example.com", "foo", "v1.0.0-rc.1"),
            occurrence("example.com", "foo", "v1.0.0"),
        ];
        let resolved = VersionSelector::resolve(&occurrences).unwrap();

        assert_eq!(resolved["example.com/foo"], Version::new(1, 0, 0));
    }
}
