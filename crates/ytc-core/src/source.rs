//! Provider payloads and the comment source seam

use crate::comment::RawComment;
use crate::error::{Result, YtcError};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use tracing::warn;

/// Video fields carried verbatim into the output document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoMetadata {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// `YYYYMMDD` as reported by the provider
    pub upload_date: Option<String>,
    pub uploader: Option<String>,
    pub uploader_id: Option<String>,
    pub channel: Option<String>,
    /// Seconds
    pub duration: Option<Number>,
    pub view_count: Option<Number>,
    pub like_count: Option<Number>,
    pub comment_count: Option<Number>,
}

/// Everything a provider returns for one video
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoDump {
    pub metadata: VideoMetadata,
    /// Comments and replies, flat, in provider order
    pub comments: Vec<RawComment>,
}

impl VideoDump {
    /// Parse a provider JSON payload
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Interpret an already parsed payload
    ///
    /// Comment records that cannot be read are skipped with a warning so one
    /// bad record never loses the rest of the batch.
    pub fn from_value(mut value: Value) -> Result<Self> {
        let object = value
            .as_object_mut()
            .ok_or_else(|| YtcError::InvalidDump("top-level value is not an object".to_string()))?;

        let comments = match object.remove("comments") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .into_iter()
                .enumerate()
                .filter_map(|(i, item)| match serde_json::from_value::<RawComment>(item) {
                    Ok(comment) => Some(comment),
                    Err(e) => {
                        warn!("Skipping unreadable comment record #{}: {}", i, e);
                        None
                    }
                })
                .collect(),
            Some(_) => {
                return Err(YtcError::InvalidDump(
                    "'comments' is not an array".to_string(),
                ))
            }
        };

        let metadata: VideoMetadata = serde_json::from_value(value)
            .map_err(|e| YtcError::InvalidDump(format!("video metadata: {}", e)))?;

        Ok(Self { metadata, comments })
    }
}

/// Anything that can produce a [`VideoDump`]
pub trait VideoSource {
    /// Fetch metadata and the flat comment list
    fn fetch(&self) -> Result<VideoDump>;

    /// Human-readable description for progress messages
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CommentId;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_dump() {
        let dump = VideoDump::from_json_str(
            r#"{
                "id": "abc123",
                "title": "标题",
                "duration": 212,
                "view_count": 1000,
                "formats": [{"format_id": "18"}],
                "comments": [
                    {"id": "c1", "parent": "root", "text": "hi", "author": "@bob", "timestamp": 1700000000},
                    {"id": "c2", "parent": "c1", "text": "yo"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(dump.metadata.id.as_deref(), Some("abc123"));
        assert_eq!(dump.metadata.title.as_deref(), Some("标题"));
        assert_eq!(dump.metadata.duration, Some(Number::from(212)));
        assert_eq!(dump.metadata.channel, None);
        assert_eq!(dump.comments.len(), 2);
        assert_eq!(dump.comments[1].parent, Some(CommentId::from("c1")));
    }

    #[test]
    fn test_missing_or_null_comments() {
        let dump = VideoDump::from_json_str(r#"{"id": "v"}"#).unwrap();
        assert!(dump.comments.is_empty());

        let dump = VideoDump::from_json_str(r#"{"id": "v", "comments": null}"#).unwrap();
        assert!(dump.comments.is_empty());
    }

    #[test]
    fn test_mistyped_fields_keep_the_record() {
        let dump = VideoDump::from_json_str(
            r#"{"comments": [
                {"id": "1", "parent": "root", "like_count": 1.5},
                {"id": "2", "parent": "1"},
                {"id": "3", "parent": "root", "author_id": 123, "author_is_uploader": "yes"}
            ]}"#,
        )
        .unwrap();
        let ids: Vec<_> = dump.comments.iter().filter_map(|c| c.id.clone()).collect();
        assert_eq!(
            ids,
            vec![CommentId::from("1"), CommentId::from("2"), CommentId::from("3")]
        );
        assert_eq!(dump.comments[0].like_count, Some(serde_json::json!(1.5)));
        assert_eq!(dump.comments[2].author_id, Some(serde_json::json!(123)));
    }

    #[test]
    fn test_non_object_comment_is_skipped() {
        let dump = VideoDump::from_json_str(
            r#"{"comments": [{"id": "ok"}, "garbage", 7, {"id": "ok2"}]}"#,
        )
        .unwrap();
        let ids: Vec<_> = dump.comments.iter().filter_map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec![CommentId::from("ok"), CommentId::from("ok2")]);
    }

    #[test]
    fn test_invalid_payloads() {
        assert!(matches!(VideoDump::from_json_str("[]"), Err(YtcError::InvalidDump(_))));
        assert!(matches!(
            VideoDump::from_json_str(r#"{"comments": {}}"#),
            Err(YtcError::InvalidDump(_))
        ));
        assert!(matches!(VideoDump::from_json_str("{"), Err(YtcError::Serde(_))));
    }
}
