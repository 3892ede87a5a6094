//! # relchat Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! ## Overview
//!
//! This module implements `relchat ask`, which answers one question and exits.
//! It is the scripting-friendly entry point: the answer goes to stdout with
//! its embedded line breaks intact, logs go to stderr.
//!
//! ## Usage
//!
//! ```bash
//! relchat ask "What are your opening hours?"
//!
//! # Unquoted words are joined with spaces
//! relchat ask how long does tiling take
//!
//! # Show which rule answered
//! relchat ask --explain do you fix leaking pipes
//! ```
//!
//! With `--explain` two extra lines precede the answer:
//!
//! ```text
//! intent: plumbing
//! resolution: refinement #2
//! Yes, we provide pipe repairs, leak detection, and replacement.
//! ```
//!
use super::limit_input;
use anyhow::Context;
use clap::Parser;
use relchat::core::{config, content, error::Result};
use std::path::Path;
use tracing::{debug, info};

/// # Ask Arguments (`AskArgs`)
#[derive(Parser, Debug)]
#[command(about = "Answer a single question")]
pub struct AskArgs {
    /// The question. Several words are joined with single spaces.
    #[arg(required = true, num_args = 1..)]
    question: Vec<String>,

    /// Print the matched intent and resolution before the answer.
    #[arg(long)]
    explain: bool,
}

/// # Handle Ask Command (`handle_ask`)
///
/// ## Workflow:
/// 1. Loads configuration and builds the chatbot from the configured content.
/// 2. Joins the question words and applies the input-length guard.
/// 3. Classifies the question and prints the answer (plus explanation if asked).
pub async fn handle_ask(args: AskArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling ask command...");
    let cfg = config::load_config(config_path).context("Failed to load relchat configuration")?;
    let bot = content::load_chatbot(&cfg)?;

    let question = args.question.join(" ");
    let question = limit_input(&question, cfg.chat.max_input_chars);
    let result = bot.classify(question);
    debug!(
        "Answered with intent '{}' ({})",
        result.intent, result.resolution
    );

    if args.explain {
        println!("intent: {}", result.intent);
        println!("resolution: {}", result.resolution);
    }
    println!("{}", result.response);
    Ok(())
}
