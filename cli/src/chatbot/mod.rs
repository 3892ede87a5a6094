//! # FAQ Response Engine
//!
//! File: cli/src/chatbot/mod.rs
//!
//! ## Overview
//!
//! This module turns a free-text question from a site visitor into exactly one
//! canned answer. It is a rule-based classifier, not a language model:
//!
//! 1. The utterance is normalized (trimmed, lower-cased).
//! 2. The ordered rule table in [`rules`] is walked; the first rule whose
//!    keywords occur in the utterance is selected.
//! 3. Within that rule, the first matching refinement picks a specific answer;
//!    otherwise the rule's own answer is used (the topic fallback).
//! 4. If no rule matches, a contact-us reply is returned (the global fallback).
//!
//! ## Architecture
//!
//! - `knowledge`: topic → facet → answer content ([`KnowledgeBase`])
//! - `profile`: company facts used by interpolated replies ([`CompanyProfile`])
//! - `rules`: the ordered decision list and its keyword predicates
//! - `replies`: pure formatting of profile-based replies
//!
//! [`Chatbot`] owns one knowledge base and one profile, both fixed at
//! construction. It has no interior mutability and no I/O, so a shared
//! `&Chatbot` can answer from any number of threads.
//!
//! ## Examples
//!
//! ```rust
//! use relchat::chatbot::Chatbot;
//!
//! let bot = Chatbot::default();
//! let answer = bot.respond("Are you open on Monday?");
//! assert_eq!(answer, "We're open on Monday from 9:00 AM - 6:00 PM. How else can we help?");
//! ```
//!
pub mod knowledge;
pub mod profile;
pub mod replies;
pub mod rules;

pub use knowledge::{KnowledgeBase, Topic};
pub use profile::CompanyProfile;
pub use rules::Intent;

use rules::Reply;
use std::fmt;

/// # Normalize Utterance (`normalize`)
///
/// Trims surrounding whitespace and lower-cases the text. Applying it twice
/// gives the same result as applying it once.
pub fn normalize(utterance: &str) -> String {
    utterance.trim().to_lowercase()
}

/// Which step of the decision produced the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The refinement at this index inside the selected rule matched.
    Refinement(usize),
    /// The rule matched but none of its refinements did.
    TopicDefault,
    /// No rule matched.
    GlobalDefault,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Refinement(index) => write!(f, "refinement #{}", index + 1),
            Resolution::TopicDefault => f.write_str("topic default"),
            Resolution::GlobalDefault => f.write_str("global default"),
        }
    }
}

/// The answer to one utterance and how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub intent: Intent,
    pub resolution: Resolution,
    pub response: String,
}

/// # Chatbot (`Chatbot`)
///
/// The response engine. Build it once with the content it should answer from
/// and call [`Chatbot::respond`] for every message.
#[derive(Debug, Clone, Default)]
pub struct Chatbot {
    knowledge: KnowledgeBase,
    profile: CompanyProfile,
}

impl Chatbot {
    /// Creates a chatbot answering from `knowledge` and `profile`.
    ///
    /// Both values are expected to be validated already: `KnowledgeBase`
    /// cannot be constructed otherwise, and callers loading a profile from a
    /// file run [`CompanyProfile::validate`] first.
    pub fn new(knowledge: KnowledgeBase, profile: CompanyProfile) -> Self {
        Self { knowledge, profile }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn profile(&self) -> &CompanyProfile {
        &self.profile
    }

    /// # Respond (`respond`)
    ///
    /// Returns the answer for `utterance`. Never fails and never returns an
    /// empty string; unmatched input gets the global fallback reply.
    pub fn respond(&self, utterance: &str) -> String {
        self.classify(utterance).response
    }

    /// # Classify (`classify`)
    ///
    /// Same decision as [`Chatbot::respond`], also reporting the selected
    /// intent and which step produced the answer.
    pub fn classify(&self, utterance: &str) -> Classification {
        let message = normalize(utterance);
        match rules::select(&message) {
            Some((rule, Some(index))) => Classification {
                intent: rule.intent,
                resolution: Resolution::Refinement(index),
                response: self.render(&rule.refinements[index].reply),
            },
            Some((rule, None)) => Classification {
                intent: rule.intent,
                resolution: Resolution::TopicDefault,
                response: self.render(&rule.otherwise),
            },
            None => Classification {
                intent: Intent::Fallback,
                resolution: Resolution::GlobalDefault,
                response: self.render(&rules::GLOBAL_DEFAULT),
            },
        }
    }

    fn render(&self, reply: &Reply) -> String {
        match *reply {
            Reply::Facet(topic, facet) => self.knowledge.answer(topic, facet).to_string(),
            Reply::FacetWithNote(topic, facet, note) => {
                format!("{}{note}", self.knowledge.answer(topic, facet))
            }
            Reply::Facets(topic, facets) => facets
                .iter()
                .map(|facet| self.knowledge.answer(topic, facet))
                .collect::<Vec<_>>()
                .join("\n\n"),
            Reply::Text(text) => text.to_string(),
            Reply::Render(template) => replies::render(template, &self.knowledge, &self.profile),
        }
    }
}
