//! # relchat Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the configuration of the `relchat`
//! front end. The response engine itself takes no configuration beyond the
//! content it answers from; the settings here decide *which* content is
//! loaded and how the terminal front end behaves around it.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file given by `--config` or `RELCHAT_CONFIG`
//! 2. Project-specific `.relchat.toml` in the current directory or ancestors
//! 3. User-specific `<config dir>/relchat/config.toml`
//! 4. Default values defined in the code
//!
//! An explicit file replaces (2) and (3) entirely. Otherwise project values
//! override user values wherever they differ from the defaults.
//!
//! ## Examples
//!
//! ```toml
//! [chat]
//! typing_delay_ms = 500
//! max_input_chars = 500
//!
//! [content]
//! file = "~/site/chatbot.toml"
//! ```
//!
//! ```rust,ignore
//! let cfg = config::load_config(None)?;
//! let bot = content::load_chatbot(&cfg)?;
//! ```
//!
use crate::core::error::{ChatError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Longest typing delay accepted, in milliseconds.
pub const MAX_TYPING_DELAY_MS: u64 = 10_000;

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

/// Front-end behaviour around the response engine.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Pause before each reply in `relchat chat`, imitating the widget's typing delay.
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,
    /// Utterances longer than this many characters are truncated before classification.
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
}

/// Where the company profile and knowledge base come from.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Content file with `[company]` and/or `[knowledge]` tables (can use ~).
    /// Built-in content is used when unset.
    pub file: Option<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: default_typing_delay_ms(),
            max_input_chars: default_max_input_chars(),
        }
    }
}

fn default_typing_delay_ms() -> u64 {
    500
}
fn default_max_input_chars() -> usize {
    500
}

const PROJECT_CONFIG_FILENAME: &str = ".relchat.toml";

/// # Load Configuration (`load_config`)
///
/// Resolves the configuration for this invocation.
///
/// ## Arguments
///
/// * `explicit`: Path from `--config` / `RELCHAT_CONFIG`, if given. The file must exist.
///
/// ## Returns
///
/// * `Result<Config>`: The merged, path-expanded and validated configuration.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    expand_config_paths(&mut config).context("Failed to expand paths in configuration")?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Reliable", "relchat") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.relchat.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.relchat.toml`,
/// stopping at the first directory that contains `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.chat.typing_delay_ms = if project_cfg.chat.typing_delay_ms != default_typing_delay_ms() {
        project_cfg.chat.typing_delay_ms
    } else {
        user.chat.typing_delay_ms
    };
    merged.chat.max_input_chars = if project_cfg.chat.max_input_chars != default_max_input_chars()
    {
        project_cfg.chat.max_input_chars
    } else {
        user.chat.max_input_chars
    };
    merged.content.file = project_cfg.content.file.or(user.content.file);
    merged
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(file) = &mut config.content.file {
        *file = shellexpand::tilde(file.as_str()).into_owned();
        debug!("Expanded content file path: {}", file);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.chat.max_input_chars == 0 {
        return Err(anyhow!(ChatError::Config(
            "chat.max_input_chars must be greater than zero.".to_string()
        )));
    }
    if config.chat.typing_delay_ms > MAX_TYPING_DELAY_MS {
        return Err(anyhow!(ChatError::Config(format!(
            "chat.typing_delay_ms must be at most {MAX_TYPING_DELAY_MS} (got {}).",
            config.chat.typing_delay_ms
        ))));
    }
    if let Some(file) = &config.content.file {
        if !Path::new(file).is_file() {
            return Err(anyhow!(ChatError::Config(format!(
                "Configured content file '{file}' does not exist or is not a file."
            ))));
        }
    }
    info!("Configuration validation successful.");
    Ok(())
}
