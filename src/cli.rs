use clap::Parser;
use deplister::application::dto::OutputFormat;
use std::path::PathBuf;

/// List the dependencies of npm and Go projects with their full dependency paths
#[derive(Parser, Debug)]
#[command(name = "deplister")]
#[command(version)]
#[command(
    about = "List the dependencies of npm and Go projects with their full dependency paths",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long = "out", visible_alias = "output", value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Output format: json or text
    #[arg(short, long, value_name = "FORMAT", conflicts_with = "text")]
    pub format: Option<OutputFormat>,

    /// Shorthand for --format text
    #[arg(short, long)]
    pub text: bool,

    /// Pretty print JSON output (ignored for text)
    #[arg(long)]
    pub pretty: bool,

    /// Exclude dependencies matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "@types/*" -e "golang.org/x/*"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Path to a config file (defaults to deplister.config.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of attempts for each Go toolchain invocation
    #[arg(long, value_name = "N")]
    pub retries: Option<u32>,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Format chosen on the command line, if any
    pub fn requested_format(&self) -> Option<OutputFormat> {
        if self.text {
            Some(OutputFormat::Text)
        } else {
            self.format
        }
    }
}
