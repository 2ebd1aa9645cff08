use gosum_osv::adapters::outbound::console::StderrProgressReporter;
use gosum_osv::adapters::outbound::filesystem::{
    AdvisoryFileRepository, FileSystemWriter, GoSumReader, StdoutPresenter,
};
use gosum_osv::adapters::outbound::network::OsvFeedClient;
use gosum_osv::application::dto::{ScanRequest, ScanStatus};
use gosum_osv::application::use_cases::ScanModulesUseCase;
use gosum_osv::cli::{Args, OutputFormat};
use gosum_osv::config::{self, ConfigFile};
use gosum_osv::ports::outbound::{AdvisoryRepository, OutputPresenter};
use gosum_osv::shared::error::{ExitCode, ScanError};
use gosum_osv::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

fn main() {
    match run() {
        Ok(exit_code) => {
            if exit_code != ExitCode::Success {
                process::exit(exit_code.as_i32());
            }
        }
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate project directory
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);

    validate_project_path(&project_path)?;

    // Load configuration: explicit --config wins, otherwise look for
    // gosum-osv.config.yml in the project directory
    let config_file = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(Path::new(path))?,
        None => config::discover_config(&project_path)?.unwrap_or_default(),
    };

    let format = resolve_format(&args, &config_file)?;
    let policy = config_file.match_policy();
    let ignore_ids = config_file.ignored_ids();

    // Create adapters (Dependency Injection)
    let dependency_reader = GoSumReader::new();
    let advisory_repository = create_advisory_repository(&args, &config_file, &project_path)?;
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = ScanModulesUseCase::new(
        dependency_reader,
        advisory_repository,
        progress_reporter,
        policy,
    );

    // Execute use case
    let request = ScanRequest::new(project_path, ignore_ids);
    let response = use_case.execute(request)?;
    let status = response.status();

    // Display progress message
    eprintln!("{}", format.progress_message());

    // Format and present the report
    let formatter = format.create_formatter();
    let formatted_output = formatter.format(&response.findings, &response.metadata)?;

    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };

    presenter.present(&formatted_output)?;

    match status {
        ScanStatus::Success => {
            eprintln!("✅ No known vulnerabilities found");
            Ok(ExitCode::Success)
        }
        ScanStatus::VulnerabilitiesDetected => {
            eprintln!(
                "⚠️  {} vulnerability finding(s) detected",
                response.findings.len()
            );
            Ok(ExitCode::VulnerabilitiesDetected)
        }
    }
}

/// CLI flag wins over the config file; json is the fallback.
fn resolve_format(args: &Args, config_file: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = args.format {
        return Ok(format);
    }

    match config_file.format.as_deref() {
        Some(value) => OutputFormat::from_str(value).map_err(|e| anyhow::anyhow!(e)),
        None => Ok(OutputFormat::Json),
    }
}

/// Chooses the advisory source: a local corpus file when one is
/// configured, otherwise the OSV.dev feed.
fn create_advisory_repository(
    args: &Args,
    config_file: &ConfigFile,
    project_path: &Path,
) -> Result<Box<dyn AdvisoryRepository>> {
    if let Some(corpus_path) = args.advisories.as_deref() {
        return Ok(Box::new(AdvisoryFileRepository::new(PathBuf::from(
            corpus_path,
        ))));
    }

    if let Some(corpus_file) = config_file.advisory_file.as_deref() {
        return Ok(Box::new(AdvisoryFileRepository::new(
            project_path.join(corpus_file),
        )));
    }

    Ok(Box::new(OsvFeedClient::new()?))
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ScanError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| ScanError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(ScanError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(ScanError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    // Security check: Canonicalize path to prevent path traversal
    let canonical_path = path
        .canonicalize()
        .map_err(|e| ScanError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to canonicalize path: {}", e),
        })?;

    if !canonical_path.is_dir() {
        return Err(ScanError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Resolved path is not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
