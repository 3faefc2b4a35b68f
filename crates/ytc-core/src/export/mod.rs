//! Output document and exporters
//!
//! The output document combines the provider's video metadata with the
//! threaded, filtered comment forest.
//!
//! # Example
//!
//! ```ignore
//! use ytc_core::export::{Exporter, JsonExporter};
//!
//! let (document, stats) = pipeline.process(dump);
//! let json = JsonExporter::pretty().export(&document)?;
//! ```

mod document;
mod exporter;
mod json;

pub use document::{DocumentSink, VideoDocument};
pub use exporter::Exporter;
pub use json::JsonExporter;
