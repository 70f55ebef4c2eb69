use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::composer::{InitialBand, PromptLimits};
use crate::history::DEFAULT_CAPACITY;
use crate::image_client::DEFAULT_BASE_URL;

/// Upper bound for `IMAGE_MAX_RETRIES`; the backoff doubles per attempt.
const MAX_IMAGE_RETRIES: u32 = 10;

/// Application configuration loaded from environment variables.
/// Fails at startup if a value is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// History is kept in memory when unset.
    pub database_url: Option<String>,
    /// Server-side fallback when a request carries no key.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub image_max_retries: u32,
    pub image_retry_delay: Duration,
    pub history_capacity: usize,
    pub prompt_max_chars: usize,
    pub initial_prompt_min_chars: usize,
    pub initial_prompt_max_chars: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let config = Config {
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            database_url: optional("DATABASE_URL"),
            openai_api_key: optional("OPENAI_API_KEY"),
            openai_base_url: optional("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            image_max_retries: parse_or(&lookup, "IMAGE_MAX_RETRIES", 3)?,
            image_retry_delay: Duration::from_millis(parse_or(
                &lookup,
                "IMAGE_RETRY_DELAY_MS",
                1000,
            )?),
            history_capacity: parse_or(&lookup, "HISTORY_CAPACITY", DEFAULT_CAPACITY)?,
            prompt_max_chars: parse_or(&lookup, "PROMPT_MAX_CHARS", 4000)?,
            initial_prompt_min_chars: parse_or(&lookup, "INITIAL_PROMPT_MIN_CHARS", 1450)?,
            initial_prompt_max_chars: parse_or(&lookup, "INITIAL_PROMPT_MAX_CHARS", 1500)?,
        };

        if config.initial_prompt_min_chars > config.initial_prompt_max_chars {
            bail!(
                "INITIAL_PROMPT_MIN_CHARS ({}) must not exceed INITIAL_PROMPT_MAX_CHARS ({})",
                config.initial_prompt_min_chars,
                config.initial_prompt_max_chars
            );
        }
        if config.image_max_retries > MAX_IMAGE_RETRIES {
            bail!(
                "IMAGE_MAX_RETRIES must be at most {MAX_IMAGE_RETRIES}, got {}",
                config.image_max_retries
            );
        }
        if config.history_capacity == 0 {
            bail!("HISTORY_CAPACITY must be at least 1");
        }
        if config.prompt_max_chars == 0 {
            bail!("PROMPT_MAX_CHARS must be at least 1");
        }

        Ok(config)
    }

    pub fn prompt_limits(&self) -> PromptLimits {
        PromptLimits {
            max_chars: self.prompt_max_chars,
            ..PromptLimits::default()
        }
    }

    pub fn initial_band(&self) -> InitialBand {
        InitialBand {
            min_chars: self.initial_prompt_min_chars,
            max_chars: self.initial_prompt_max_chars,
            ..InitialBand::default()
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
