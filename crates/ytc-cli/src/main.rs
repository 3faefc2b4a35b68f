//! ytc - YouTube comment threads
//!
//! Downloads a video's comments, drops spam and policy-sensitive comments,
//! masks sensitive terms in author names, and writes the survivors as a
//! reply tree next to the video metadata.
//!
//! ## Quick Start
//!
//! ```bash
//! # Fetch and convert in one step (requires yt-dlp)
//! ytc fetch https://www.youtube.com/watch?v=VIDEO_ID
//!
//! # Convert a saved `yt-dlp --dump-json --get-comments` file
//! ytc convert dump.json -o out.json
//!
//! # Try the filter on a single comment
//! ytc check --text "hello" --author "@someone"
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
