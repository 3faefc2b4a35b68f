//! JSON exporter for documents

use super::document::VideoDocument;
use super::exporter::Exporter;
use crate::error::Result;

/// JSON exporter; non-ASCII text is written literally
pub struct JsonExporter {
    /// Whether to use pretty-print formatting (2-space indent)
    pretty: bool,
}

impl JsonExporter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Create a compact JSON exporter
    pub fn compact() -> Self {
        Self::new(false)
    }

    /// Create a pretty-printed JSON exporter
    pub fn pretty() -> Self {
        Self::new(true)
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::pretty()
    }
}

impl Exporter for JsonExporter {
    fn export(&self, document: &VideoDocument) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(document)?
        } else {
            serde_json::to_string(document)?
        };
        Ok(json)
    }

    fn format_name(&self) -> &str {
        if self.pretty {
            "json"
        } else {
            "json-compact"
        }
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
