//! Filter statistics

use crate::filter::Classification;
use serde::{Deserialize, Serialize};

/// Counters accumulated over one processing pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Comments dropped as spam
    pub spam: usize,
    /// Comments dropped for sensitive text
    pub sensitive: usize,
    /// Kept comments whose author name was masked
    pub censored_author: usize,
    /// Kept comments left out of the forest because their parent was missing
    #[serde(default)]
    pub orphaned: usize,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one classification; clean comments count nothing
    pub fn record(&mut self, outcome: &Classification) {
        match outcome {
            Classification::Spam => self.spam += 1,
            Classification::Sensitive => self.sensitive += 1,
            Classification::Admissible {
                author_was_redacted: true,
                ..
            } => self.censored_author += 1,
            Classification::Admissible { .. } => {}
        }
    }

    /// Comments removed by classification
    pub fn dropped(&self) -> usize {
        self.spam + self.sensitive
    }

    /// Whether anything was filtered, masked or orphaned
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
