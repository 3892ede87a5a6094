//! # relchat Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the `relchat` CLI, the
//! terminal front end of the response engine. The engine only maps text to
//! text; the commands here own everything around it: reading input, applying
//! the input-length guard, pacing replies and printing them.
//!
//! ## Commands
//!
//! - `ask`: Answer a single question
//! - `chat`: Interactive chat loop on stdin
//! - `rules`: Print the ordered decision list
//! - `kb`: Export or validate content files
//!
use tracing::debug;

/// Answer one question given on the command line.
pub mod ask;
/// Interactive chat session reading from stdin.
pub mod chat;
/// Content file export and validation.
pub mod kb;
/// Listing of the rule table in evaluation order.
pub mod rules;

/// # Limit Input (`limit_input`)
///
/// Truncates `text` to at most `max_chars` characters (not bytes) so an
/// oversized paste cannot make classification arbitrarily expensive.
pub fn limit_input(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            debug!(
                "Input truncated from {} to {} characters.",
                text.chars().count(),
                max_chars
            );
            &text[..cut]
        }
        None => text,
    }
}
