use std::env;
use std::time::Duration;

use thiserror::Error;

pub const SUPABASE_URL: &str = "SUPABASE_URL";
pub const SUPABASE_SERVICE_ROLE_KEY: &str = "SUPABASE_SERVICE_ROLE_KEY";
pub const SUPABASE_TIMEOUT_SECS: &str = "SUPABASE_TIMEOUT_SECS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing {} environment variable(s)", .0.join(" and "))]
    MissingEnvVars(Vec<&'static str>),

    #[error("Invalid value for {key}: {details}")]
    Invalid { key: &'static str, details: String },

    #[error("Failed to build store client: {0}")]
    Client(String),
}

/// Credentials and transport settings for the hosted store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub url: String,
    pub service_role_key: String,
    /// `None` leaves the HTTP client's default timeout in place.
    pub timeout: Option<Duration>,
}

impl StoreConfig {
    pub fn new(url: impl Into<String>, service_role_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            service_role_key: service_role_key.into(),
            timeout: None,
        }
    }

    /// Read the store settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the settings from an arbitrary key lookup. Empty values count as
    /// missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let url = read(SUPABASE_URL);
        let key = read(SUPABASE_SERVICE_ROLE_KEY);

        let (url, key) = match (url, key) {
            (Some(url), Some(key)) => (url, key),
            (url, key) => {
                let mut missing = Vec::new();
                if url.is_none() {
                    missing.push(SUPABASE_URL);
                }
                if key.is_none() {
                    missing.push(SUPABASE_SERVICE_ROLE_KEY);
                }
                return Err(ConfigError::MissingEnvVars(missing));
            }
        };

        let timeout = match read(SUPABASE_TIMEOUT_SECS) {
            None => None,
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e| ConfigError::Invalid {
                    key: SUPABASE_TIMEOUT_SECS,
                    details: format!("'{}': {}", raw, e),
                })?;
                Some(Duration::from_secs(secs))
            }
        };

        Ok(Self {
            url: url.trim().trim_end_matches('/').to_string(),
            service_role_key: key.trim().to_string(),
            timeout,
        })
    }
}
