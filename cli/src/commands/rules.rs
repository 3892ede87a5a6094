//! # relchat Rules Command
//!
//! File: cli/src/commands/rules.rs
//!
//! ## Overview
//!
//! `relchat rules` prints the decision list in the order it is evaluated.
//! Since the first matching rule wins, this is the quickest way to see why a
//! question containing keywords from two topics got the answer it did.
//!
//! Example output:
//!
//! ```text
//!   #  Intent              Refinements  Keywords
//!   1  hours               4            "open" | "close" | "hours" | "time"
//!   2  contact             1            "phone" | "contact" | "call" | "number"
//! ...
//!  38  fallback            -            (anything else)
//! ```
//!
use clap::Parser;
use relchat::chatbot::{rules::RULES, Intent};
use relchat::core::error::Result;
use tracing::info;

/// # Rules Arguments (`RulesArgs`)
#[derive(Parser, Debug)]
#[command(about = "List the response rules in evaluation order")]
pub struct RulesArgs {
    /// Also list each rule's refinements.
    #[arg(long)]
    refinements: bool,
}

pub async fn handle_rules(args: RulesArgs) -> Result<()> {
    info!("Handling rules command...");
    print!("{}", render_table(args.refinements));
    Ok(())
}

fn render_table(with_refinements: bool) -> String {
    let mut out = format!("{:>3}  {:<20}{:<13}{}\n", "#", "Intent", "Refinements", "Keywords");
    for (i, rule) in RULES.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<20}{:<13}{}\n",
            i + 1,
            rule.intent.name(),
            rule.refinements.len(),
            rule.trigger
        ));
        if with_refinements {
            for (j, refinement) in rule.refinements.iter().enumerate() {
                out.push_str(&format!("{:>8}.{:<2}  {}\n", i + 1, j + 1, refinement.trigger));
            }
        }
    }
    out.push_str(&format!(
        "{:>3}  {:<20}{:<13}{}\n",
        RULES.len() + 1,
        Intent::Fallback.name(),
        "-",
        "(anything else)"
    ));
    out
}
