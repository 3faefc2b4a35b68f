//! Convert command
//!
//! Filter and thread a previously saved yt-dlp dump.

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use ytc_storage::DumpFileSource;

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Path to a `yt-dlp --dump-json --get-comments` file
    pub input: PathBuf,

    /// Output file path (defaults to <video id>_formatted.json)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Write single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Print the document to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

/// Execute the convert command
pub fn execute(args: ConvertArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = super::load_config(config_path)?;
    if args.compact {
        config.output.pretty = false;
    }

    let source = DumpFileSource::new(&args.input);
    super::run_pipeline(&source, &config, args.output.as_deref(), args.stdout)
}
