use crate::shared::Result;
use crate::vuln_matching::domain::DependencyOccurrence;
use std::path::Path;

/// DependencyReader port for obtaining raw dependency occurrences
///
/// This port abstracts the parsing of a project's dependency manifest
/// (go.sum) into raw (namespace, name, version) occurrences. No
/// ordering among occurrences is guaranteed.
pub trait DependencyReader {
    /// Reads dependency occurrences from the specified project directory
    ///
    /// # Arguments
    /// * `project_path` - Path to the project directory containing go.sum
    ///
    /// # Returns
    /// All dependency occurrences found in the manifest, duplicates included
    ///
    /// # Errors
    /// Returns an error if:
    /// - The go.sum file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    /// - A manifest line does not follow the go.sum format
    fn read_dependencies(&self, project_path: &Path) -> Result<Vec<DependencyOccurrence>>;
}
