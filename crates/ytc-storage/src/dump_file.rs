//! Source reading a saved provider dump

use std::fs;
use std::path::PathBuf;
use tracing::debug;
use ytc_core::error::{Result, YtcError};
use ytc_core::source::{VideoDump, VideoSource};

/// Reads a JSON file previously produced by `yt-dlp --dump-json`
pub struct DumpFileSource {
    path: PathBuf,
}

impl DumpFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VideoSource for DumpFileSource {
    fn fetch(&self) -> Result<VideoDump> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                YtcError::FileNotFound(self.path.clone())
            } else {
                YtcError::Io(e)
            }
        })?;

        let dump = VideoDump::from_json_str(&content)
            .map_err(|e| e.with_context(format!("Failed to parse {}", self.path.display())))?;
        debug!(
            "Read {} comments from {}",
            dump.comments.len(),
            self.path.display()
        );
        Ok(dump)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
