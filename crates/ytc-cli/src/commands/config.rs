//! Config command
//!
//! Manage ytc configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::Path;

use ytc_core::config::Config;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the configuration in effect
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the default configuration to .ytc/config.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print which configuration file is used
    Path,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(json, config_path),
        ConfigCommand::Init { force } => init_config(force, config_path),
        ConfigCommand::Path => print_path(config_path),
    }
}

fn show_config(as_json: bool, config_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_path)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", config.to_toml()?);
    }

    Ok(())
}

fn init_config(force: bool, config_path: Option<&Path>) -> Result<()> {
    use colored::Colorize;

    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(super::project_config_path);

    if path.exists() && !force {
        eprintln!(
            "{} {} already exists. Use --force to overwrite.",
            "⚠".yellow(),
            path.display()
        );
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let content = format!(
        "# ytc configuration\n\n{}",
        Config::default().to_toml()?
    );
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("{} Wrote {}", "✓".green(), path.display());

    Ok(())
}

fn print_path(config_path: Option<&Path>) -> Result<()> {
    match super::resolve_config_path(config_path) {
        Some(path) => println!("{}", path.display()),
        None => println!("(built-in defaults)"),
    }
    Ok(())
}
