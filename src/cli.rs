use clap::Parser;

use crate::adapters::outbound::formatters::{JsonReportFormatter, TextReportFormatter};
use crate::ports::outbound::ReportFormatter;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text' or 'json'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    pub fn create_formatter(&self) -> Box<dyn ReportFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextReportFormatter::new()),
            OutputFormat::Json => Box::new(JsonReportFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(&self) -> &'static str {
        match self {
            OutputFormat::Text => "📝 Generating text report...",
            OutputFormat::Json => "📝 Generating JSON report...",
        }
    }
}

/// Analyze an npm project's dependency tree and rate each dependency's
/// trustworthiness from its GitHub repository
#[derive(Parser, Debug)]
#[command(name = "npm-trust")]
#[command(version)]
#[command(
    about = "Rate the dependencies of an npm project by GitHub popularity and version maturity",
    long_about = None
)]
pub struct Args {
    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// GitHub personal access token (overrides GITHUB_TOKEN and the
    /// config file)
    #[arg(short, long)]
    pub token: Option<String>,

    /// Maximum dependency depth to analyze (1 = direct dependencies)
    #[arg(short = 'd', long = "max-depth")]
    pub max_depth: Option<usize>,

    /// Disable the persistent repository-metadata cache
    #[arg(long = "no-cache")]
    pub no_cache: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
