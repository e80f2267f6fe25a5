use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("EMAILJS_TIMEOUT_SECS must be a whole number of seconds")]
    InvalidTimeout,
}

/// Credentials and endpoint for the email relay, supplied at deploy time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
    pub timeout: Duration,
}

impl RelayConfig {
    /// Reads `.env` (if any) and then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| non_empty(key).ok_or(ConfigError::Missing(key));

        let timeout = match non_empty("EMAILJS_TIMEOUT_SECS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            endpoint: non_empty("EMAILJS_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            service_id: required("EMAILJS_SERVICE_ID")?,
            template_id: required("EMAILJS_TEMPLATE_ID")?,
            public_key: required("EMAILJS_PUBLIC_KEY")?,
            private_key: non_empty("EMAILJS_PRIVATE_KEY"),
            timeout: Duration::from_secs(timeout),
        })
    }
}
