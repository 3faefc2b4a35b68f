//! Core type definitions for ytc

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Parent value the provider uses for top-level comments
pub const ROOT_PARENT: &str = "root";

/// Identifier of a comment as assigned by the provider
///
/// Providers normally send string ids, but integer ids are accepted and
/// kept in their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CommentId(pub String);

impl CommentId {
    /// Create a CommentId from a string
    pub fn from_string(s: impl Into<String>) -> Self {
        CommentId(s.into())
    }

    /// Whether this id marks a top-level comment: the sentinel or an empty id
    pub fn is_root(&self) -> bool {
        self.0.is_empty() || self.0 == ROOT_PARENT
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CommentId {
    fn from(s: &str) -> Self {
        CommentId(s.to_string())
    }
}

impl<'de> Deserialize<'de> for CommentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum WireId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match WireId::deserialize(deserializer)? {
            WireId::Text(s) => CommentId(s),
            WireId::Signed(n) => CommentId(n.to_string()),
            WireId::Unsigned(n) => CommentId(n.to_string()),
        })
    }
}
