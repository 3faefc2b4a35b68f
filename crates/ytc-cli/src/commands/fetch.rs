//! Fetch command
//!
//! Download a video's metadata and comments with yt-dlp and convert them.

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use ytc_storage::YtDlpSource;

/// Arguments for the fetch command
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Video URL
    pub url: String,

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

/// Execute the fetch command
pub fn execute(args: FetchArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = super::load_config(config_path)?;
    if args.compact {
        config.output.pretty = false;
    }

    let source = YtDlpSource::with_config(&args.url, &config.source);
    super::run_pipeline(&source, &config, args.output.as_deref(), args.stdout)
}
