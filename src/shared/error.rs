use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a clean scan from a scan
/// that found vulnerabilities, and both from an infrastructure failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - no vulnerabilities detected
    Success = 0,
    /// Vulnerabilities were detected in the scanned dependencies
    VulnerabilitiesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (corpus fetch error, parse error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::VulnerabilitiesDetected => write!(f, "Vulnerabilities Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the vulnerability scan.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("go.sum file not found: {path}\n\n💡 Hint: {suggestion}")]
    GoSumNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse go.sum file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the go.sum file is in the correct format")]
    GoSumParseError { path: PathBuf, details: String },

    #[error("No dependencies were parsed from: {path}\n\n💡 Hint: The go.sum file appears to be empty. A scan over zero dependencies would always report success, so this is treated as a failure")]
    NoDependencies { path: PathBuf },

    #[error("Failed to obtain the advisory corpus\nDetails: {details}\n\n💡 Hint: Check network connectivity, or pass a local corpus file with --advisories")]
    AdvisoryCorpusError { details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // ExitCode tests
    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::VulnerabilitiesDetected.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::VulnerabilitiesDetected),
            "Vulnerabilities Detected (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_exit_code_equality() {
        assert_eq!(ExitCode::Success, ExitCode::Success);
        assert_ne!(ExitCode::Success, ExitCode::ApplicationError);
    }

    // ScanError tests
    #[test]
    fn test_gosum_not_found_display() {
        let error = ScanError::GoSumNotFound {
            path: PathBuf::from("/test/path/go.sum"),
            suggestion: "Test suggestion".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("go.sum file not found"));
        assert!(display.contains("/test/path/go.sum"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Test suggestion"));
    }

    #[test]
    fn test_gosum_parse_error_display() {
        let error = ScanError::GoSumParseError {
            path: PathBuf::from("/test/go.sum"),
            details: "Unexpected token".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse go.sum file"));
        assert!(display.contains("/test/go.sum"));
        assert!(display.contains("Unexpected token"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_no_dependencies_display() {
        let error = ScanError::NoDependencies {
            path: PathBuf::from("/test/go.sum"),
        };
        let display = format!("{}", error);
        assert!(display.contains("No dependencies were parsed"));
        assert!(display.contains("/test/go.sum"));
        assert!(display.contains("treated as a failure"));
    }

    #[test]
    fn test_advisory_corpus_error_display() {
        let error = ScanError::AdvisoryCorpusError {
            details: "connection refused".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to obtain the advisory corpus"));
        assert!(display.contains("connection refused"));
        assert!(display.contains("--advisories"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = ScanError::FileWriteError {
            path: PathBuf::from("/test/report.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/report.json"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_invalid_project_path_display() {
        let error = ScanError::InvalidProjectPath {
            path: PathBuf::from("/invalid/path"),
            reason: "Directory does not exist".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid project path"));
        assert!(display.contains("/invalid/path"));
        assert!(display.contains("Directory does not exist"));
    }
}
