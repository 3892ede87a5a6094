//! # relchat Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout relchat. The response
//! engine itself cannot fail (every utterance gets an answer), so errors only
//! come from the layers around it: loading configuration, loading a content
//! file, and validating a company profile or knowledge base before a
//! `Chatbot` is built from it.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ChatError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! Library constructors (`KnowledgeBase::from_topics`, `CompanyProfile::validate`)
//! return `std::result::Result<_, ChatError>` so callers can match on the variant.
//! Command handlers use `Result<T>` and add context with `anyhow`.
//!
//! ## Examples
//!
//! ```rust,ignore
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read content file: {}", path.display()))?;
//!
//! match KnowledgeBase::from_toml_str(&content) {
//!     Err(ChatError::Knowledge { topic, .. }) => eprintln!("bad topic {topic}"),
//!     other => { /* ... */ }
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for relchat.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid knowledge base topic '{topic}': {reason}")]
    Knowledge { topic: String, reason: String },

    #[error("Invalid company profile: {0}")]
    Profile(String),

    #[error("Invalid content file: {0}")]
    Content(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
