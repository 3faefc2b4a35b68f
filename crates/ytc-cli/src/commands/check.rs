//! Check command
//!
//! Run the classifier on a single comment, handy for tuning keyword lists.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use ytc_core::filter::{Classification, Classifier};

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Comment text
    #[arg(long, short)]
    pub text: Option<String>,

    /// Author display name
    #[arg(long, short)]
    pub author: Option<String>,
}

/// Execute the check command
pub fn execute(args: CheckArgs, config_path: Option<&Path>) -> Result<()> {
    use colored::Colorize;

    if args.text.is_none() && args.author.is_none() {
        anyhow::bail!("Nothing to check. Pass --text and/or --author");
    }

    let config = super::load_config(config_path)?;
    let classifier = Classifier::from_config(&config.filter)?;
    let outcome = classifier.classify_fields(args.text.as_deref(), args.author.as_deref());

    match &outcome {
        Classification::Spam => println!("{}", "spam (dropped)".red()),
        Classification::Sensitive => println!("{}", "sensitive (dropped)".red()),
        Classification::Admissible {
            author,
            author_was_redacted,
        } => {
            println!("{}", "admissible".green());
            if *author_was_redacted {
                println!("author: {} {}", author, "(masked)".yellow());
            } else {
                println!("author: {}", author);
            }
        }
    }

    Ok(())
}
