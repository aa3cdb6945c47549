// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    intro_characters: usize,
    top_words: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_intro_characters() -> usize {
    120
}

fn default_top_words() -> usize {
    5
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            intro_characters: default_intro_characters(),
            top_words: default_top_words(),
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let intro_characters =
            parse_usize(&lookup, "INTRO_CHARACTERS")?.unwrap_or_else(default_intro_characters);
        let top_words = parse_usize(&lookup, "TOP_WORDS")?.unwrap_or_else(default_top_words);

        if top_words == 0 {
            return Err(ConfigError::Invalid("TOP_WORDS must be positive".into()));
        }

        Ok(Self {
            intro_characters,
            top_words,
        })
    }

    pub fn intro_characters(&self) -> usize {
        self.intro_characters
    }

    pub fn top_words(&self) -> usize {
        self.top_words
    }
}

fn parse_usize(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<usize>, ConfigError> {
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::Invalid(format!("{key} must be a non-negative integer")))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.intro_characters(), 120);
        assert_eq!(config.top_words(), 5);
    }

    #[test]
    fn values_are_parsed() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("INTRO_CHARACTERS", " 40 "), ("TOP_WORDS", "3")]))
                .unwrap();
        assert_eq!(config.intro_characters(), 40);
        assert_eq!(config.top_words(), 3);
    }

    #[test]
    fn garbage_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("TOP_WORDS", "many")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: TOP_WORDS must be a non-negative integer"
        );
        assert!(AppConfig::from_lookup(lookup_from(&[("TOP_WORDS", "0")])).is_err());
    }
}
