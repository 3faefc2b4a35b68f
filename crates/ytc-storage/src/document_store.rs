//! File system storage for output documents

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use ytc_core::error::{Result, YtcError};
use ytc_core::export::{DocumentSink, Exporter, JsonExporter, VideoDocument};

/// Writes documents as JSON files
pub struct DocumentWriter {
    /// Directory used when no explicit path is given
    directory: PathBuf,
    exporter: JsonExporter,
}

impl DocumentWriter {
    pub fn new(directory: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            directory: directory.into(),
            exporter: JsonExporter::new(pretty),
        }
    }

    /// Where a document goes when no path is given
    pub fn default_path(&self, document: &VideoDocument) -> PathBuf {
        self.directory.join(document.default_file_name())
    }

    /// Write to a temp file next to `path`, then rename over it
    fn atomic_write(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
                debug!("Created output directory: {:?}", parent);
            }
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| {
                YtcError::Config(format!("Output path has no file name: {}", path.display()))
            })?;
        let temp_path = path.with_file_name(format!(".{}.tmp", file_name));

        let temp_file = fs::File::create(&temp_path).map_err(|e| {
            YtcError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create temp file: {}", e),
            ))
        })?;
        let mut writer = BufWriter::new(temp_file);
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
        drop(writer);

        fs::rename(&temp_path, path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            YtcError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to rename temp file: {}", e),
            ))
        })?;

        debug!("Saved document to {:?}", path);
        Ok(())
    }
}

impl DocumentSink for DocumentWriter {
    fn store(&self, document: &VideoDocument, path: Option<&Path>) -> Result<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.default_path(document));
        let content = self.exporter.export(document)?;
        self.atomic_write(&path, &content)?;
        Ok(path)
    }
}
