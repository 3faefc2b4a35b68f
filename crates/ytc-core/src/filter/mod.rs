//! Comment filtering
//!
//! Keyword matching, author redaction and spam/sensitivity classification.

pub mod keywords;
pub mod redactor;
pub mod classifier;

pub use keywords::{contains_keyword, KeywordSet, DEFAULT_SENSITIVE_KEYWORDS, DEFAULT_SPAM_KEYWORDS};
pub use redactor::{Redactor, MASK_CHAR};
pub use classifier::{Classification, ClassifiedComment, Classifier, URL_PATTERN};
