//! # relchat CLI Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//!
//! ## Overview
//!
//! Integration tests for `relchat chat` driven through piped stdin.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_chat_session_over_stdin() {
    let env = TestEnv::new();
    env.cmd()
        .arg("chat")
        .write_stdin("are you open on sunday?\nwhat is your email\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("Chat with Reliable Engineering and Construction!")
                .and(predicate::str::contains(
                    "Bot: We're closed on Sunday. For urgent matters, please call our emergency line.",
                ))
                .and(predicate::str::contains(
                    "Bot: You can email us at:\n• sgsaconstruction@gmail.com\n• contact@sgsa.com",
                ))
                .and(predicate::str::contains("Bot: Goodbye!")),
        );
}

#[test]
fn test_chat_ends_at_eof() {
    let env = TestEnv::new();
    env.cmd()
        .arg("chat")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chat with").and(predicate::str::contains("Bot:").not()));
}

#[test]
fn test_chat_rejects_excessive_delay() {
    let env = TestEnv::new();
    env.cmd()
        .args(["chat", "--delay-ms", "60000"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--delay-ms must be at most"));
}
