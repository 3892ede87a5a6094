//! # relchat Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `relchat` CLI, the
//! terminal front end of the website's FAQ response engine. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! - Each top-level command (`ask`, `chat`, ...) is a variant in the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - The response engine, configuration and content loading live in the
//!   `relchat` library crate
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! relchat --help
//!
//! # Ask one question with debug logging
//! relchat -vv ask "do you do waterproofing?"
//!
//! # Use a specific config file
//! relchat --config ./relchat.toml chat
//! ```
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Handles specific command logic (ask, chat, etc.)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "relchat",
    about = "FAQ chat for Reliable Engineering and Construction",
    long_about = "Answers visitor questions from the company's FAQ knowledge base.\n\
                  Ask one question, chat interactively, or inspect and export the content.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of the user/project config files.
    #[arg(long, global = true, env = "RELCHAT_CONFIG")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    Rules(commands::rules::RulesArgs),
    Kb(commands::kb::KbArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let config_path = cli.config.as_deref();
    let command_result = match cli.command {
        Commands::Ask(args) => commands::ask::handle_ask(args, config_path).await,
        Commands::Chat(args) => commands::chat::handle_chat(args, config_path).await,
        Commands::Rules(args) => commands::rules::handle_rules(args).await,
        Commands::Kb(args) => commands::kb::handle_kb(args, config_path).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

// --- Basic Integration Tests ---
#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    fn relchat_cmd() -> Command {
        Command::cargo_bin("relchat").expect("Failed to find relchat binary for testing")
    }
    #[test]
    fn test_main_help_flag() {
        relchat_cmd().arg("--help").assert().success();
    }
    #[test]
    fn test_main_version_flag() {
        relchat_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
