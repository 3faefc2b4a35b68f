//! Equal-length keyword masking

use super::keywords::KeywordSet;
use crate::error::Result;
use regex::{NoExpand, Regex, RegexBuilder};
use std::cmp::Reverse;

/// Character used to mask redacted spans
pub const MASK_CHAR: char = '*';

/// A compiled keyword and its mask
#[derive(Debug, Clone)]
struct MaskRule {
    pattern: Regex,
    mask: String,
}

/// Masks every occurrence of a keyword set with runs of [`MASK_CHAR`]
///
/// Rules are applied longest keyword first so that a short keyword
/// contained in a longer one cannot split the longer match.
#[derive(Debug, Clone)]
pub struct Redactor {
    rules: Vec<MaskRule>,
}

impl Redactor {
    /// Compile a redactor for `keywords`
    pub fn new(keywords: &KeywordSet) -> Result<Self> {
        let mut terms: Vec<&str> = keywords.terms().iter().map(String::as_str).collect();
        terms.sort_by_key(|term| Reverse(term.chars().count()));

        let rules = terms
            .into_iter()
            .map(|term| -> Result<MaskRule> {
                let pattern = RegexBuilder::new(&regex::escape(term))
                    .case_insensitive(true)
                    .build()?;
                let mask = MASK_CHAR.to_string().repeat(term.chars().count());
                Ok(MaskRule { pattern, mask })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// Mask all keyword occurrences in `text`
    pub fn redact(&self, text: &str) -> String {
        let mut result = text.to_string();
        for rule in &self.rules {
            if rule.pattern.is_match(&result) {
                result = rule
                    .pattern
                    .replace_all(&result, NoExpand(&rule.mask))
                    .into_owned();
            }
        }
        result
    }

    /// Number of compiled rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
