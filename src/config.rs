/// Configuration management for the Mirrors bot.
use crate::error::{BotError, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_LOG_FILE: &str = "visitors.log";
const DEFAULT_RESET_HOURS: u64 = 24;
const MAX_RESET_HOURS: u64 = 24 * 365;

/// Main application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token (from TELEGRAM_BOT_TOKEN).
    pub bot_token: String,
    /// Append-only file receiving operational log records.
    pub log_file: PathBuf,
    /// How often the unique visitor set is cleared.
    pub visitor_reset_interval: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `TELEGRAM_BOT_TOKEN`: The bot token from BotFather.
    ///
    /// Optional environment variables:
    /// - `VISITOR_LOG_FILE`: Log file path (default: visitors.log).
    /// - `VISITOR_RESET_HOURS`: Visitor counter reset interval (default: 24).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Required: bot token
        let bot_token = lookup("TELEGRAM_BOT_TOKEN").ok_or_else(|| {
            BotError::Config(
                "TELEGRAM_BOT_TOKEN environment variable is required. \
                 Get your token from @BotFather on Telegram."
                    .to_string(),
            )
        })?;

        if bot_token.trim().is_empty() {
            return Err(BotError::Config(
                "TELEGRAM_BOT_TOKEN cannot be empty".to_string(),
            ));
        }

        let log_file = lookup("VISITOR_LOG_FILE")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        let reset_hours = lookup("VISITOR_RESET_HOURS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_RESET_HOURS);

        if reset_hours == 0 || reset_hours > MAX_RESET_HOURS {
            return Err(BotError::Config(format!(
                "VISITOR_RESET_HOURS ({}) must be between 1 and {}",
                reset_hours, MAX_RESET_HOURS
            )));
        }

        let reset_secs = reset_hours.checked_mul(60 * 60).ok_or_else(|| {
            BotError::Config("VISITOR_RESET_HOURS is too large".to_string())
        })?;

        Ok(Config {
            bot_token,
            log_file,
            visitor_reset_interval: Duration::from_secs(reset_secs),
        })
    }
}
