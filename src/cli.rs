use clap::Parser;
use std::path::PathBuf;

use pacwhy::application::dto::OutputFormat;

/// Explain why a package is installed
///
/// Traces every chain of dependencies from an explicitly installed package
/// down to PACKAGE using the pacman local database.
#[derive(Parser, Debug)]
#[command(name = "pacwhy")]
#[command(version)]
#[command(about = "Explain why a package is installed", long_about = None)]
pub struct Args {
    /// Name of the installed package to explain
    #[arg(value_name = "PACKAGE")]
    pub package: String,

    /// Path to the pacman local database [default: /var/lib/pacman/local]
    #[arg(short, long, env = "PACWHY_DB_PATH", value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// Output format: text or json [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Maximum number of installation chains to display [default: 6]
    #[arg(short = 'n', long, value_name = "N", value_parser = parse_max_chains)]
    pub max_chains: Option<usize>,

    /// Stop searching after N chains have been found; 0 searches exhaustively [default: 10000]
    #[arg(long, value_name = "N")]
    pub search_limit: Option<usize>,

    /// Path to a YAML config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Show progress and skipped records on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_max_chains(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
