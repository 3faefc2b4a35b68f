//! Spam / sensitive / admissible classification

use super::keywords::{contains_keyword, KeywordSet};
use super::redactor::Redactor;
use crate::comment::model::RawComment;
use crate::config::FilterConfig;
use crate::error::Result;
use regex::Regex;
use tracing::debug;

/// Heuristic URL detector: scheme URLs, bare `www.` hosts, and bare domains
/// under a handful of TLDs common in promotional comments.
pub const URL_PATTERN: &str = concat!(
    r"https?://[^\s/$.?#].[^\s]*",
    r"|www\.[-a-zA-Z0-9@:%._\+~#=]{2,256}\.[a-z]{2,6}\b",
    r"|\b[a-zA-Z0-9-]+\.(?:com|net|org|shop|xyz|cn|top|dev|app)\b",
);

/// Outcome of classifying one comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Promotional content, solicitation, or a link
    Spam,
    /// Text mentions a policy-restricted term
    Sensitive,
    /// Kept; `author` is `@`-stripped and redacted
    Admissible {
        author: String,
        author_was_redacted: bool,
    },
}

impl Classification {
    pub fn is_admissible(&self) -> bool {
        matches!(self, Classification::Admissible { .. })
    }

    /// Short label for logs and CLI output
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Spam => "spam",
            Classification::Sensitive => "sensitive",
            Classification::Admissible {
                author_was_redacted: true,
                ..
            } => "censored_author",
            Classification::Admissible { .. } => "clean",
        }
    }
}

/// A raw comment tagged with its classification
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedComment {
    pub raw: RawComment,
    pub outcome: Classification,
}

/// Classifies comments against injected spam and sensitive keyword sets
#[derive(Debug, Clone)]
pub struct Classifier {
    spam: KeywordSet,
    sensitive: KeywordSet,
    author_redactor: Redactor,
    url_pattern: Regex,
    detect_urls: bool,
}

impl Classifier {
    /// Create a classifier with URL detection enabled
    pub fn new(spam: KeywordSet, sensitive: KeywordSet) -> Result<Self> {
        let author_redactor = Redactor::new(&sensitive)?;
        Ok(Self {
            spam,
            sensitive,
            author_redactor,
            url_pattern: Regex::new(URL_PATTERN)?,
            detect_urls: true,
        })
    }

    /// Create a classifier from the `[filter]` config section
    pub fn from_config(config: &FilterConfig) -> Result<Self> {
        let classifier = Self::new(
            KeywordSet::new(config.spam_keywords.iter().cloned()),
            KeywordSet::new(config.sensitive_keywords.iter().cloned()),
        )?;
        Ok(classifier.with_url_detection(config.detect_urls))
    }

    /// Enable or disable the URL heuristic
    pub fn with_url_detection(mut self, enabled: bool) -> Self {
        self.detect_urls = enabled;
        self
    }

    /// Classify a raw comment, taking ownership of it
    pub fn classify(&self, raw: RawComment) -> ClassifiedComment {
        let outcome = self.classify_fields(raw.text.as_deref(), raw.author.as_deref());
        if !outcome.is_admissible() {
            debug!(
                "Dropping comment {} as {}",
                raw.id.as_ref().map_or("<no id>", |id| id.as_str()),
                outcome.label()
            );
        }
        ClassifiedComment { raw, outcome }
    }

    /// Classify from text and author alone; the first matching rule wins
    pub fn classify_fields(&self, text: Option<&str>, author: Option<&str>) -> Classification {
        let author = strip_mention(author.unwrap_or_default());

        if self.is_spam(text, author) {
            return Classification::Spam;
        }

        // Sensitive terms reject on text only; in author names they are masked.
        if contains_keyword(text, &self.sensitive) {
            return Classification::Sensitive;
        }

        let redacted = self.author_redactor.redact(author);
        let author_was_redacted = redacted != author;
        Classification::Admissible {
            author: redacted,
            author_was_redacted,
        }
    }

    fn is_spam(&self, text: Option<&str>, author: &str) -> bool {
        if contains_keyword(text, &self.spam) || contains_keyword(Some(author), &self.spam) {
            return true;
        }

        self.detect_urls && text.map_or(false, |text| self.url_pattern.is_match(text))
    }
}

/// Drop a single leading `@` from a display name
fn strip_mention(author: &str) -> &str {
    author.strip_prefix('@').unwrap_or(author)
}
