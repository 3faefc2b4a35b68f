//! Comment data models

use crate::types::CommentId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Read a field leniently: a value of the wrong type becomes `None`
/// instead of failing the whole record.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// A comment exactly as received from the provider
///
/// Every field is optional: records missing fields are carried through with
/// nulls rather than rejected. A field of the wrong type degrades to null on
/// its own; the pass-through fields are kept as raw JSON values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawComment {
    /// Provider comment id
    #[serde(deserialize_with = "lenient")]
    pub id: Option<CommentId>,
    /// Parent id, `"root"` for top-level comments
    #[serde(deserialize_with = "lenient")]
    pub parent: Option<CommentId>,
    /// Comment body
    #[serde(deserialize_with = "lenient")]
    pub text: Option<String>,
    /// Display name, possibly prefixed with `@`
    #[serde(deserialize_with = "lenient")]
    pub author: Option<String>,
    /// Provider channel id of the author
    pub author_id: Option<Value>,
    /// Whether the author uploaded the video
    pub author_is_uploader: Option<Value>,
    /// Like count
    pub like_count: Option<Value>,
    /// Epoch seconds; kept raw since providers occasionally send other types
    pub timestamp: Option<Value>,
}

impl RawComment {
    /// Create a comment with an id and no other fields
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(CommentId::from_string(id)),
            ..Self::default()
        }
    }

    /// Set the parent id
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(CommentId::from_string(parent));
        self
    }

    /// Set the text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the author display name
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the timestamp
    pub fn with_timestamp(mut self, timestamp: impl Into<Value>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Whether the comment sits at the top level (no parent or the root sentinel)
    pub fn is_top_level(&self) -> bool {
        self.parent.as_ref().map_or(true, CommentId::is_root)
    }
}

/// A filtered, redacted comment in output shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedComment {
    pub id: Option<CommentId>,
    pub parent: Option<CommentId>,
    pub text: Option<String>,
    pub like_count: Option<Value>,
    /// Author after `@` stripping and redaction
    pub author: String,
    pub author_id: Option<Value>,
    pub author_is_uploader: Option<Value>,
    pub timestamp: Option<Value>,
    /// `YYYY-MM-DD HH:MM:SS` rendering of `timestamp`
    #[serde(rename = "datetime")]
    pub formatted_datetime: Option<String>,
    /// Direct replies in encounter order
    #[serde(default)]
    pub replies: Vec<NormalizedComment>,
}

impl NormalizedComment {
    /// Number of comments in this subtree, including itself
    pub fn subtree_len(&self) -> usize {
        1 + self.replies.iter().map(NormalizedComment::subtree_len).sum::<usize>()
    }
}

/// Ordered top-level comments, each owning its reply subtree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentForest(pub Vec<NormalizedComment>);

impl CommentForest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level comments
    pub fn roots(&self) -> &[NormalizedComment] {
        &self.0
    }

    /// Number of top-level comments
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of comments across all subtrees
    pub fn total_len(&self) -> usize {
        self.0.iter().map(NormalizedComment::subtree_len).sum()
    }

    /// Depth-first search for a comment by id
    pub fn find(&self, id: &CommentId) -> Option<&NormalizedComment> {
        let mut stack: Vec<&NormalizedComment> = self.0.iter().rev().collect();
        while let Some(node) = stack.pop() {
            if node.id.as_ref() == Some(id) {
                return Some(node);
            }
            stack.extend(node.replies.iter().rev());
        }
        None
    }
}

impl IntoIterator for CommentForest {
    type Item = NormalizedComment;
    type IntoIter = std::vec::IntoIter<NormalizedComment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
