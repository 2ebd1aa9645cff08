use crate::ports::outbound::DependencyReader;
use crate::shared::error::ScanError;
use crate::shared::Result;
use crate::vuln_matching::domain::DependencyOccurrence;
use std::fs;
use std::path::Path;

const GO_SUM_FILENAME: &str = "go.sum";
const GO_MOD_ENTRY_SUFFIX: &str = "/go.mod";

/// GoSumReader adapter parsing a project's go.sum manifest.
///
/// Each go.sum line has the shape `module version hash`; version
/// entries for a module's go.mod file carry a `/go.mod` suffix that is
/// stripped here. The same module appears many times across a manifest;
/// all occurrences are returned and version selection collapses them
/// later.
pub struct GoSumReader;

impl GoSumReader {
    pub fn new() -> Self {
        Self
    }

    fn parse_line(line: &str, path: &Path, line_number: usize) -> Result<DependencyOccurrence> {
        let mut fields = line.split_whitespace();
        let module = fields.next();
        let version = fields.next();

        let (Some(module), Some(version)) = (module, version) else {
            return Err(ScanError::GoSumParseError {
                path: path.to_path_buf(),
                details: format!(
                    "Line {}: expected 'module version hash', found '{}'",
                    line_number, line
                ),
            }
            .into());
        };

        let version = version.strip_suffix(GO_MOD_ENTRY_SUFFIX).unwrap_or(version);

        let (namespace, name) = match module.rsplit_once('/') {
            Some((namespace, name)) => (namespace.to_string(), name.to_string()),
            None => (String::new(), module.to_string()),
        };

        Ok(DependencyOccurrence::new(
            namespace,
            name,
            version.to_string(),
        ))
    }
}

impl Default for GoSumReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyReader for GoSumReader {
    fn read_dependencies(&self, project_path: &Path) -> Result<Vec<DependencyOccurrence>> {
        let gosum_path = project_path.join(GO_SUM_FILENAME);

        if !gosum_path.exists() {
            return Err(ScanError::GoSumNotFound {
                path: gosum_path,
                suggestion: "Run 'go mod tidy' in the project directory to generate go.sum"
                    .to_string(),
            }
            .into());
        }

        let content = fs::read_to_string(&gosum_path).map_err(|e| ScanError::FileReadError {
            path: gosum_path.clone(),
            details: format!("{}", e),
        })?;

        let mut occurrences = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            occurrences.push(Self::parse_line(line, &gosum_path, index + 1)?);
        }

        Ok(occurrences)
    }
}
