use gosum_osv::prelude::*;
use std::path::Path;

/// Mock DependencyReader for testing that parses go.sum content from
/// a string instead of the file system
pub struct MockDependencyReader {
    content: String,
}

impl MockDependencyReader {
    pub fn new(content: String) -> Self {
        Self { content }
    }

    fn parse_line(line: &str) -> Option<DependencyOccurrence> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 3 {
            return None;
        }

        let module = parts[0];
        let version = parts[1].trim_end_matches("/go.mod");

        let (namespace, name) = match module.rsplit_once('/') {
            Some((namespace, name)) => (namespace.to_string(), name.to_string()),
            None => (String::new(), module.to_string()),
        };

        Some(DependencyOccurrence::new(
            namespace,
            name,
            version.to_string(),
        ))
    }
}

impl DependencyReader for MockDependencyReader {
    fn read_dependencies(&self, _project_path: &Path) -> Result<Vec<DependencyOccurrence>> {
        Ok(self
            .content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(Self::parse_line)
            .collect())
    }
}
