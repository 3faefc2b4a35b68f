//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod check;
pub mod config;
pub mod convert;
pub mod fetch;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use ytc_core::comment::Stats;
use ytc_core::config::Config;
use ytc_core::export::{DocumentSink, VideoDocument};
use ytc_core::source::VideoSource;
use ytc_core::CommentPipeline;
use ytc_storage::DocumentWriter;

/// ytc - filter and thread YouTube comments
#[derive(Debug, Parser)]
#[command(name = "ytc")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "YTC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download comments with yt-dlp, filter and thread them
    Fetch(fetch::FetchArgs),

    /// Filter and thread a saved yt-dlp dump
    Convert(convert::ConvertArgs),

    /// Classify a single comment
    Check(check::CheckArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = cli.config.as_deref();

    // Dispatch to command handler
    match cli.command {
        Commands::Fetch(args) => fetch::execute(args, config_path),
        Commands::Convert(args) => convert::execute(args, config_path),
        Commands::Check(args) => check::execute(args, config_path),
        Commands::Config(cmd) => config::execute(cmd, config_path),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Project-local configuration file
pub fn project_config_path() -> PathBuf {
    PathBuf::from(".ytc/config.toml")
}

/// Per-user configuration file
pub fn user_config_path() -> PathBuf {
    directories::ProjectDirs::from("com", "ytc", "ytc")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".ytc")
                .join("config.toml")
        })
}

/// The configuration file in effect, if any exists
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    [project_config_path(), user_config_path()]
        .into_iter()
        .find(|p| p.exists())
}

/// Load the configuration: explicit path, project file, user file, defaults
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match resolve_config_path(explicit) {
        Some(path) => {
            tracing::debug!("Using configuration {}", path.display());
            Config::load(&path).with_context(|| format!("Failed to load {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

/// Shared fetch/convert flow: source → pipeline → writer or stdout
pub fn run_pipeline(
    source: &dyn VideoSource,
    config: &Config,
    output: Option<&Path>,
    to_stdout: bool,
) -> Result<()> {
    use colored::Colorize;
    use std::io::Write;
    use ytc_core::export::{Exporter, JsonExporter};

    eprintln!("Reading comments from {}...", source.describe().cyan());
    let dump = source
        .fetch()
        .with_context(|| format!("Failed to fetch {}", source.describe()))?;

    let pipeline = CommentPipeline::from_config(config)?;
    let (document, stats) = pipeline.process(dump);
    print_stats(&stats);

    if to_stdout {
        let json = JsonExporter::new(config.output.pretty).export(&document)?;
        std::io::stdout()
            .write_all(json.as_bytes())
            .context("Failed to write to stdout")?;
        println!();
        return Ok(());
    }

    let path = store(&document, config, output)?;
    eprintln!(
        "{} Saved {} comments to {}",
        "✓".green(),
        document.comments.total_len().to_string().yellow(),
        path.display()
    );
    Ok(())
}

fn store(document: &VideoDocument, config: &Config, output: Option<&Path>) -> Result<PathBuf> {
    let writer = DocumentWriter::new(&config.output.directory, config.output.pretty);
    writer
        .store(document, output)
        .context("Failed to write output document")
}

/// Print the filter summary to stderr
pub fn print_stats(stats: &Stats) {
    use colored::Colorize;

    eprintln!("\n{}", "--- Filter summary ---".bold());
    if stats.is_empty() {
        eprintln!("Nothing filtered.");
    }
    if stats.spam > 0 {
        eprintln!("Dropped {} spam comments.", stats.spam.to_string().yellow());
    }
    if stats.sensitive > 0 {
        eprintln!(
            "Dropped {} comments with sensitive content.",
            stats.sensitive.to_string().yellow()
        );
    }
    if stats.censored_author > 0 {
        eprintln!(
            "Masked {} author names.",
            stats.censored_author.to_string().yellow()
        );
    }
    if stats.orphaned > 0 {
        eprintln!(
            "Left out {} replies whose parent was removed.",
            stats.orphaned.to_string().yellow()
        );
    }
    eprintln!("{}", "----------------------".bold());
}
