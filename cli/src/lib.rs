//! # relchat Library
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! The FAQ response engine behind the chat widget of the Reliable Engineering
//! and Construction website, plus the configuration and content loading used
//! by the `relchat` binary.
//!
//! - [`chatbot`]: the rule-based classifier ([`chatbot::Chatbot`])
//! - [`core`]: configuration, content files and errors
//!
pub mod chatbot;
pub mod core;
