use crate::error::AppError;
use std::env;
use std::time::Duration;

const DEFAULT_REGION: &str = "na1";
const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_LOCALE: &str = "en_US";

#[derive(Debug, Clone)]
pub struct Config {
    pub lookup_url: Option<String>,
    pub contact_url: Option<String>,
    pub region: String,
    pub timeout: Duration,
    pub locale: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_source(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` feeds it the process environment.
    pub fn from_source<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let lookup_url = read("SUMMONER_LOOKUP_URL");
        // One function usually serves both the lookup and the contact form
        let contact_url = read("CONTACT_FORM_URL").or_else(|| lookup_url.clone());

        let region = read("SUMMONER_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string());
        let locale = read("DDRAGON_LOCALE").unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        let timeout_secs = match read("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    AppError::ConfigError(format!(
                        "REQUEST_TIMEOUT_SECS must be a positive integer, got '{}'",
                        raw
                    ))
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            lookup_url,
            contact_url,
            region,
            timeout: Duration::from_secs(timeout_secs),
            locale,
        })
    }

    pub fn require_lookup_url(&self) -> Result<&str, AppError> {
        self.lookup_url.as_deref().ok_or_else(|| {
            AppError::ConfigError("SUMMONER_LOOKUP_URL not found in environment or .env file".to_string())
        })
    }
}
