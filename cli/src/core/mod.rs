//! # relchat Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure that surrounds the response
//! engine: configuration, content loading and error types.
//!
//! ## Architecture
//!
//! - `config`: Configuration loading, merging, and validation
//! - `content`: Loading and exporting company/knowledge content files
//! - `error`: Error types and error handling utilities
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::content; // For building the chatbot from content
//! use crate::core::error::{ChatError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod content;
pub mod error;
