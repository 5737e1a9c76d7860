use std::env;
use std::fmt;

use thiserror::Error;

use crate::chat::DEFAULT_SYSTEM_PROMPT;

pub const DEFAULT_API_HOSTNAME: &str = "https://api.mistral.ai";
pub const DEFAULT_MODEL: &str = "open-mistral-7b";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing env var MISTRAL_API_KEY")]
    MissingApiKey,
}

#[derive(Clone)]
pub struct AppConfig {
    pub api_hostname: String,
    pub api_key: String,
    pub model: String,
    pub system_message: String,
}

impl AppConfig {
    /// Read the configuration from the process environment, loading a
    /// `.env` file first if one exists in the working directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("MISTRAL_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let api_hostname =
            env::var("MISTRAL_API_HOST").unwrap_or_else(|_| DEFAULT_API_HOSTNAME.to_string());
        let model = env::var("MISTRAL_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let system_message = env::var("CHATBOT_SYSTEM_MESSAGE")
            .unwrap_or_else(|_| DEFAULT_SYSTEM_PROMPT.to_string());

        Ok(Self {
            api_hostname,
            api_key,
            model,
            system_message,
        })
    }
}

// Keep the bearer token out of logs
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_hostname", &self.api_hostname)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("system_message", &self.system_message)
            .finish()
    }
}
