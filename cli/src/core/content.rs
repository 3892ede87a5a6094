//! # Content Files
//!
//! File: cli/src/core/content.rs
//!
//! ## Overview
//!
//! A content file lets the site owner replace the built-in company profile,
//! knowledge base, or both, without rebuilding. Both tables are optional;
//! whatever is missing falls back to the built-in content.
//!
//! ```toml
//! [company]
//! name = "Reliable Engineering and Construction"
//! # ...
//!
//! [knowledge.plumbing]
//! services = "We handle residential and commercial plumbing ..."
//! ```
//!
//! `relchat kb export` writes the active content in this format, which makes
//! it a convenient starting point for edits.
//!
use crate::chatbot::{knowledge::KnowledgeTables, Chatbot, CompanyProfile, KnowledgeBase};
use crate::core::config::Config;
use crate::core::error::{ChatError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::{debug, info};

/// Optional replacements for the built-in profile and knowledge base.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge: Option<KnowledgeBase>,
}

/// What a content file deserializes to before validation.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct RawContentFile {
    #[serde(default)]
    company: Option<CompanyProfile>,
    #[serde(default)]
    knowledge: Option<KnowledgeTables>,
}

impl ContentFile {
    /// # Parse Content (`parse`)
    ///
    /// Parses TOML text, then validates whichever sections are present.
    ///
    /// ## Returns
    ///
    /// * `Err(ChatError::Content)` if the text is not a well-formed content file.
    /// * `Err(ChatError::Knowledge)` / `Err(ChatError::Profile)` if a section
    ///   breaks its invariants.
    pub fn parse(source: &str) -> std::result::Result<Self, ChatError> {
        let raw: RawContentFile =
            toml::from_str(source).map_err(|e| ChatError::Content(e.to_string()))?;
        let knowledge = raw.knowledge.map(KnowledgeBase::try_from).transpose()?;
        if let Some(company) = &raw.company {
            company.validate()?;
        }
        Ok(Self {
            company: raw.company,
            knowledge,
        })
    }

    /// Builds a chatbot, filling missing parts with built-in content.
    pub fn into_chatbot(self) -> Chatbot {
        Chatbot::new(
            self.knowledge.unwrap_or_default(),
            self.company.unwrap_or_default(),
        )
    }

    /// Captures everything a chatbot answers from, for export.
    pub fn from_chatbot(bot: &Chatbot) -> Self {
        Self {
            company: Some(bot.profile().clone()),
            knowledge: Some(bot.knowledge().clone()),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize content as TOML")
    }
}

/// Reads and validates the content file at `path`.
pub fn load_content_file(path: &Path) -> Result<ContentFile> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file: {}", path.display()))?;
    ContentFile::parse(&source)
        .with_context(|| format!("Failed to load content file: {}", path.display()))
}

/// # Load Chatbot (`load_chatbot`)
///
/// Builds the chatbot for this invocation: from the configured content file
/// if there is one, otherwise from the built-in content.
pub fn load_chatbot(config: &Config) -> Result<Chatbot> {
    match &config.content.file {
        Some(file) => {
            info!("Loading chatbot content from: {}", file);
            let content = load_content_file(Path::new(file))?;
            debug!(
                "Content file overrides company: {}, knowledge: {}",
                content.company.is_some(),
                content.knowledge.is_some()
            );
            Ok(content.into_chatbot())
        }
        None => {
            debug!("No content file configured; using built-in content.");
            Ok(Chatbot::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ContentConfig;
    use tempfile::tempdir;

    #[test]
    fn empty_content_uses_built_in_defaults() {
        let content = ContentFile::parse("").unwrap();
        assert_eq!(content, ContentFile::default());

        let bot = content.into_chatbot();
        assert_eq!(bot.profile(), &CompanyProfile::default());
    }

    #[test]
    fn exported_content_parses_back() {
        let exported = ContentFile::from_chatbot(&Chatbot::default());
        let text = exported.to_toml().unwrap();
        assert!(text.contains("[company]"));
        assert!(text.contains("[knowledge.tiling]"));
        assert_eq!(ContentFile::parse(&text).unwrap(), exported);
    }

    #[test]
    fn invalid_company_is_rejected() {
        let mut profile = CompanyProfile::default();
        profile.contact.emails.clear();
        let text = ContentFile {
            company: Some(profile),
            knowledge: None,
        }
        .to_toml()
        .unwrap();

        assert_eq!(
            ContentFile::parse(&text),
            Err(ChatError::Profile("at least one email is required".into()))
        );
    }

    #[test]
    fn invalid_knowledge_reports_topic() {
        let text = ContentFile::from_chatbot(&Chatbot::default())
            .to_toml()
            .unwrap();
        let broken = text.replacen(
            "services = \"We provide professional painting",
            "general = \"We provide professional painting",
            1,
        );
        assert_ne!(broken, text);

        assert_eq!(
            ContentFile::parse(&broken),
            Err(ChatError::Knowledge {
                topic: "painting".into(),
                reason: "missing 'services' facet".into(),
            })
        );
    }

    #[test]
    fn unknown_section_is_a_content_error() {
        let err = ContentFile::parse("[compnay]\nname = \"x\"\n").unwrap_err();
        assert!(matches!(err, ChatError::Content(_)), "unexpected error: {err:?}");
    }

    #[test]
    fn load_chatbot_reads_configured_file() {
        let mut profile = CompanyProfile::default();
        profile.name = "Test Builders".into();
        let text = ContentFile {
            company: Some(profile),
            knowledge: None,
        }
        .to_toml()
        .unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("content.toml");
        fs::write(&path, text).unwrap();

        let config = Config {
            content: ContentConfig {
                file: Some(path.to_string_lossy().to_string()),
            },
            ..Default::default()
        };
        let bot = load_chatbot(&config).unwrap();
        assert_eq!(bot.profile().name, "Test Builders");
        assert!(bot.respond("xyzzy").contains("Test Builders"));
    }
}
