//! Exporter trait

use super::document::VideoDocument;
use crate::error::Result;

/// Trait for document exporters
pub trait Exporter: Send + Sync {
    /// Export a document to string
    fn export(&self, document: &VideoDocument) -> Result<String>;

    /// Get the format name
    fn format_name(&self) -> &str;

    /// Get the file extension
    fn file_extension(&self) -> &str;
}
