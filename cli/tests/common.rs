//! # relchat CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`ask.rs`, `chat.rs`, ...).
//! Each `.rs` file in `cli/tests/` is compiled as its own test crate and
//! pulls this in with `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// # Get relchat Command (`relchat_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `relchat` binary.
///
/// ## Panics
/// Panics if the `relchat` binary cannot be found via `Command::cargo_bin`.
pub fn relchat_cmd() -> Command {
    Command::cargo_bin("relchat").expect("Failed to find relchat binary for testing")
}

/// A temporary directory holding a config file (and optionally content).
/// Keep it alive for as long as the command runs.
pub struct TestEnv {
    pub dir: TempDir,
    pub config: PathBuf,
}

impl TestEnv {
    /// Config with no typing delay and built-in content.
    pub fn new() -> Self {
        Self::with_config("[chat]\ntyping_delay_ms = 0\n")
    }

    pub fn with_config(config_toml: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = dir.path().join("relchat.toml");
        fs::write(&config, config_toml).expect("Failed to write test config");
        Self { dir, config }
    }

    /// Writes `content_toml` next to the config and points the config at it.
    pub fn with_content(content_toml: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let content = dir.path().join("content.toml");
        fs::write(&content, content_toml).expect("Failed to write test content");
        let config = dir.path().join("relchat.toml");
        let config_toml = format!(
            "[chat]\ntyping_delay_ms = 0\n\n[content]\nfile = {:?}\n",
            content.to_string_lossy()
        );
        fs::write(&config, config_toml).expect("Failed to write test config");
        Self { dir, config }
    }

    /// `relchat` command using this environment's config file.
    pub fn cmd(&self) -> Command {
        let mut cmd = relchat_cmd();
        cmd.env("RELCHAT_CONFIG", &self.config)
            .env_remove("RUST_LOG")
            .current_dir(self.dir.path());
        cmd
    }
}
