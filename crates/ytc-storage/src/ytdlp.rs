//! yt-dlp subprocess source

use std::io::ErrorKind;
use std::process::Command;
use tracing::{debug, info};
use ytc_core::config::SourceConfig;
use ytc_core::error::{Result, YtcError};
use ytc_core::source::{VideoDump, VideoSource};

/// Arguments that make yt-dlp print metadata and comments without downloading
const DUMP_ARGS: &[&str] = &["--skip-download", "--get-comments", "--dump-json"];

/// Fetches video metadata and comments by running yt-dlp
pub struct YtDlpSource {
    url: String,
    program: String,
    extra_args: Vec<String>,
}

impl YtDlpSource {
    /// Create a source for `url` using `yt-dlp` from PATH
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_config(url, &SourceConfig::default())
    }

    /// Create a source honoring the `[source]` config section
    pub fn with_config(url: impl Into<String>, config: &SourceConfig) -> Self {
        Self {
            url: url.into(),
            program: config.ytdlp_path.clone(),
            extra_args: config.extra_args.clone(),
        }
    }

    /// Check if the binary can be executed
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Full argument list passed to the binary
    pub fn args(&self) -> Vec<String> {
        DUMP_ARGS
            .iter()
            .map(|s| s.to_string())
            .chain(self.extra_args.iter().cloned())
            .chain(std::iter::once(self.url.clone()))
            .collect()
    }
}

impl VideoSource for YtDlpSource {
    fn fetch(&self) -> Result<VideoDump> {
        if !self.is_available() {
            return Err(YtcError::ToolNotInstalled(self.program.clone()));
        }

        info!("Fetching metadata and comments from {}", self.url);
        let args = self.args();
        debug!("Running {} {:?}", self.program, args);

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => YtcError::ToolNotInstalled(self.program.clone()),
                _ => YtcError::Io(e),
            })?;

        if !output.status.success() {
            return Err(YtcError::Command {
                command: self.program.clone(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        VideoDump::from_json_str(&stdout)
            .map_err(|e| e.with_context(format!("Failed to parse {} output", self.program)))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
