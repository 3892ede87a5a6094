//! # relchat Knowledge Base Commands
//!
//! File: cli/src/commands/kb.rs
//!
//! ## Overview
//!
//! This module implements the `relchat kb` command group for working with
//! content files:
//! - `export`: write the active company profile and knowledge base as TOML
//! - `check`: parse and validate a content file without using it
//!
//! ## Usage
//!
//! ```bash
//! # Start a content file from the built-in content
//! relchat kb export --output chatbot.toml
//!
//! # After editing, make sure it still loads
//! relchat kb check chatbot.toml
//! ```
//!
use anyhow::Context;
use clap::{Parser, Subcommand};
use relchat::core::{
    config,
    content::{self, ContentFile},
    error::Result,
};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

/// Top-level arguments for the 'kb' command group.
#[derive(Parser, Debug)]
pub struct KbArgs {
    #[command(subcommand)]
    command: KbCommand,
}

/// Subcommands under 'relchat kb'.
#[derive(Subcommand, Debug)]
enum KbCommand {
    /// Print (or write) the active content as TOML
    Export(ExportArgs),
    /// Validate a content file
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Write to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Path of the content file to validate.
    file: PathBuf,
}

/// Main handler function for the 'kb' command group.
pub async fn handle_kb(args: KbArgs, config_path: Option<&Path>) -> Result<()> {
    match args.command {
        KbCommand::Export(args) => handle_export(args, config_path),
        KbCommand::Check(args) => handle_check(args),
    }
}

/// # Handle Export (`handle_export`)
///
/// Exports whatever the chatbot would currently answer from, so a configured
/// content file is exported merged with the built-in parts it leaves out.
fn handle_export(args: ExportArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling kb export command...");
    let cfg = config::load_config(config_path).context("Failed to load relchat configuration")?;
    let bot = content::load_chatbot(&cfg)?;
    let text = ContentFile::from_chatbot(&bot).to_toml()?;

    match args.output {
        Some(path) => {
            fs::write(&path, text)
                .with_context(|| format!("Failed to write content file: {}", path.display()))?;
            println!("Content written to '{}'.", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn handle_check(args: CheckArgs) -> Result<()> {
    info!("Handling kb check command for {}", args.file.display());
    let content = content::load_content_file(&args.file)?;

    let describe = |present: bool| if present { "custom" } else { "built-in" };
    println!("Content file '{}' is valid.", args.file.display());
    println!("  company:   {}", describe(content.company.is_some()));
    println!("  knowledge: {}", describe(content.knowledge.is_some()));
    Ok(())
}
