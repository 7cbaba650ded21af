use std::time::Duration;

use thiserror::Error;

const DEFAULT_API_BASE: &str = "https://discord.com/api/v9";
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_RUN_DEADLINE: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),
}

/// Run configuration, built once at startup and passed into constructors.
/// Nothing else reads the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub channel_id: String,
    pub bot_token: String,
    pub api_base: String,
    pub request_timeout: Duration,
    pub run_deadline: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let channel_id =
            std::env::var("CHANNEL_ID").map_err(|_| ConfigError::MissingVar("CHANNEL_ID"))?;
        let bot_token =
            std::env::var("BOT_TOKEN").map_err(|_| ConfigError::MissingVar("BOT_TOKEN"))?;

        Ok(Self {
            channel_id,
            bot_token,
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            run_deadline: DEFAULT_RUN_DEADLINE,
        })
    }
}
