//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Error;
use crate::Result;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the OpenAI-compatible completion endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key for the endpoint (Ollama accepts any non-empty value)
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Model both default agents run on
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum tool-reasoning rounds per turn
    #[serde(default = "default_max_rounds")]
    pub max_rounds: usize,

    /// Destination file for appended slide records
    #[serde(default = "default_deck_path")]
    pub deck_path: PathBuf,
}

fn default_base_url() -> String {
    "http://localhost:11434/v1".to_string()
}

fn default_api_key() -> String {
    "ollama".to_string()
}

fn default_model() -> String {
    "mistral-small:24b".to_string()
}

fn default_max_rounds() -> usize {
    crate::agent::DEFAULT_MAX_ROUNDS
}

fn default_deck_path() -> PathBuf {
    config_dir().join("deck.jsonl")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: default_api_key(),
            model: default_model(),
            max_rounds: default_max_rounds(),
            deck_path: default_deck_path(),
        }
    }
}

/// Get the config directory path
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".deckhand")
}

/// Get the config file path
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Load configuration from file
pub fn load() -> Result<Config> {
    let path = config_path();

    if !path.exists() {
        return Err(Error::Config(format!("Config not found at {:?}", path)));
    }

    let content = std::fs::read_to_string(&path)?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}

/// Save configuration to file
pub fn save(config: &Config) -> Result<()> {
    let path = config_path();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model, "mistral-small:24b");
        assert_eq!(config.max_rounds, 8);
        assert_eq!(config.base_url, "http://localhost:11434/v1");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.model, config.model);
        assert_eq!(parsed.max_rounds, config.max_rounds);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = serde_json::from_str(r#"{"model": "llama3:8b"}"#).unwrap();
        assert_eq!(parsed.model, "llama3:8b");
        assert_eq!(parsed.max_rounds, 8);
    }
}
