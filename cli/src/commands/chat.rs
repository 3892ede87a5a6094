//! # relchat Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! This module implements `relchat chat`, an interactive session that plays
//! the role of the website's chat widget in a terminal:
//! - a greeting naming the company
//! - one answer per non-blank input line
//! - a short "typing" pause before each answer
//! - multi-line answers printed with their line breaks
//!
//! The session ends on `bye`, `exit` or `quit` (any case), or at end of input,
//! so it also works with piped stdin.
//!
//! ## Usage
//!
//! ```bash
//! relchat chat
//! relchat chat --delay-ms 0
//! printf 'hours\nemail\n' | relchat chat --delay-ms 0
//! ```
//!
use super::limit_input;
use anyhow::{bail, Context};
use clap::Parser;
use relchat::chatbot::Chatbot;
use relchat::core::{
    config::{self, MAX_TYPING_DELAY_MS},
    content,
    error::Result,
};
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// Words that end the session.
const EXIT_WORDS: [&str; 3] = ["bye", "exit", "quit"];

/// # Chat Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
#[command(about = "Start an interactive chat session")]
pub struct ChatArgs {
    /// Pause before each reply in milliseconds (overrides `chat.typing_delay_ms`).
    #[arg(long)]
    delay_ms: Option<u64>,
}

/// Per-session settings resolved from arguments and configuration.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub typing_delay: Duration,
    pub max_input_chars: usize,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Loads configuration and content, then runs a session on stdin/stdout.
pub async fn handle_chat(args: ChatArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling chat command...");
    let cfg = config::load_config(config_path).context("Failed to load relchat configuration")?;

    let delay_ms = args.delay_ms.unwrap_or(cfg.chat.typing_delay_ms);
    if delay_ms > MAX_TYPING_DELAY_MS {
        bail!("--delay-ms must be at most {MAX_TYPING_DELAY_MS} (got {delay_ms}).");
    }
    let bot = content::load_chatbot(&cfg)?;
    let options = SessionOptions {
        typing_delay: Duration::from_millis(delay_ms),
        max_input_chars: cfg.chat.max_input_chars,
    };

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_session(&bot, stdin, &mut stdout, options).await
}

/// # Run Session (`run_session`)
///
/// Drives one conversation: reads lines from `input` until an exit word or
/// end of input, writing the greeting, prompts and answers to `output`.
///
/// ## Returns
///
/// * `Ok(())` when the session ends normally.
/// * `Err` if reading input or writing output fails.
pub async fn run_session<R, W>(
    bot: &Chatbot,
    input: R,
    output: &mut W,
    options: SessionOptions,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(
        output,
        "Chat with {}! Type 'bye' to quit.",
        bot.profile().name
    )?;

    let mut lines = input.lines();
    let mut answered = 0usize;
    loop {
        write!(output, "You: ")?;
        output.flush().context("Failed to flush output")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            writeln!(output)?;
            break;
        };
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if EXIT_WORDS.iter().any(|w| message.eq_ignore_ascii_case(w)) {
            writeln!(output, "Bot: Goodbye!")?;
            break;
        }

        if !options.typing_delay.is_zero() {
            tokio::time::sleep(options.typing_delay).await;
        }
        let result = bot.classify(limit_input(message, options.max_input_chars));
        debug!("intent '{}' ({})", result.intent, result.resolution);
        writeln!(output, "Bot: {}", result.response)?;
        answered += 1;
    }

    info!("Chat session ended after {} answer(s).", answered);
    Ok(())
}
