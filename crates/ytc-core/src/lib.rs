//! ytc-core - Core library for ytc
//!
//! This crate provides the comment sanitization and threading engine:
//! keyword matching, author redaction, spam/sensitivity classification,
//! normalization and reply-tree reconstruction, plus the configuration,
//! provider payload and output document types around it.

pub mod error;
pub mod types;
pub mod config;
pub mod filter;
pub mod comment;
pub mod source;
pub mod export;
pub mod pipeline;

pub use error::{Result, YtcError};
pub use pipeline::{CommentPipeline, Processed};
pub use types::*;
