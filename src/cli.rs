use clap::Parser;

use crate::adapters::outbound::formatters::{JsonFormatter, TableFormatter};
use crate::ports::outbound::ReportFormatter;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Table,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" | "markdown" | "md" => Ok(OutputFormat::Table),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'table'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    pub fn create_formatter(&self) -> Box<dyn ReportFormatter> {
        match self {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Table => Box::new(TableFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(&self) -> &'static str {
        match self {
            OutputFormat::Json => "📝 Generating JSON report...",
            OutputFormat::Table => "📝 Generating table report...",
        }
    }
}

/// Scan Go module dependencies for known vulnerabilities
#[derive(Parser, Debug)]
#[command(name = "gosum-osv")]
#[command(version)]
#[command(about = "Scan go.sum dependencies against OSV advisories", long_about = None)]
pub struct Args {
    /// Output format: json or table (defaults to json, or the config file value)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to the project directory containing go.sum (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to a local advisory corpus JSON file (skips the OSV network fetch)
    #[arg(short, long)]
    pub advisories: Option<String>,

    /// Path to a config file (defaults to gosum-osv.config.yml in the project directory)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
