//! Conversion of admissible comments into output records

use super::model::NormalizedComment;
use crate::config::DisplayZone;
use crate::filter::{Classification, ClassifiedComment};
use chrono::{DateTime, Local, Utc};

/// Rendering used for the `datetime` field
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Builds [`NormalizedComment`]s from classified comments
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    zone: DisplayZone,
}

impl Normalizer {
    pub fn new(zone: DisplayZone) -> Self {
        Self { zone }
    }

    /// Build the output record, or `None` for dropped comments
    pub fn normalize(&self, classified: ClassifiedComment) -> Option<NormalizedComment> {
        let ClassifiedComment { raw, outcome } = classified;
        let author = match outcome {
            Classification::Admissible { author, .. } => author,
            Classification::Spam | Classification::Sensitive => return None,
        };

        let formatted_datetime = raw
            .timestamp
            .as_ref()
            .and_then(|ts| self.format_timestamp(ts));

        Some(NormalizedComment {
            id: raw.id,
            parent: raw.parent,
            text: raw.text,
            like_count: raw.like_count,
            author,
            author_id: raw.author_id,
            author_is_uploader: raw.author_is_uploader,
            timestamp: raw.timestamp,
            formatted_datetime,
            replies: Vec::new(),
        })
    }

    /// Render an epoch-seconds value; non-numeric or out-of-range values give `None`
    pub fn format_timestamp(&self, timestamp: &serde_json::Value) -> Option<String> {
        let utc = to_datetime(timestamp)?;
        let rendered = match self.zone {
            DisplayZone::Utc => utc.format(DATETIME_FORMAT).to_string(),
            DisplayZone::Local => utc.with_timezone(&Local).format(DATETIME_FORMAT).to_string(),
        };
        Some(rendered)
    }
}

fn to_datetime(timestamp: &serde_json::Value) -> Option<DateTime<Utc>> {
    if let Some(secs) = timestamp.as_i64() {
        return DateTime::from_timestamp(secs, 0);
    }

    let secs = timestamp.as_f64().filter(|f| f.is_finite())?;
    let whole = secs.floor();
    if whole < i64::MIN as f64 || whole > i64::MAX as f64 {
        return None;
    }
    let nanos = (((secs - whole) * 1e9) as u32).min(999_999_999);
    DateTime::from_timestamp(whole as i64, nanos)
}
