//! ytc-storage - Sources and storage for ytc
//!
//! This crate provides the concrete collaborators behind the core's seams:
//! a yt-dlp subprocess source, a saved-dump source, and a file system
//! document writer.

mod document_store;
mod dump_file;
mod ytdlp;

pub use document_store::DocumentWriter;
pub use dump_file::DumpFileSource;
pub use ytdlp::YtDlpSource;
