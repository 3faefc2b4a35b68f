//! The combined video + comment forest document

use crate::comment::CommentForest;
use crate::error::Result;
use crate::source::VideoMetadata;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Video metadata followed by the threaded comments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoDocument {
    #[serde(flatten)]
    pub metadata: VideoMetadata,
    pub comments: CommentForest,
}

impl VideoDocument {
    pub fn new(metadata: VideoMetadata, comments: CommentForest) -> Self {
        Self { metadata, comments }
    }

    /// `<video id>_formatted.json`, or `video_formatted.json` without an id
    pub fn default_file_name(&self) -> String {
        let id = self
            .metadata
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or("video");
        format!("{}_formatted.json", id)
    }
}

/// Durable storage for finished documents
pub trait DocumentSink {
    /// Store `document`, at `path` when given, returning where it went
    fn store(&self, document: &VideoDocument, path: Option<&Path>) -> Result<PathBuf>;
}
