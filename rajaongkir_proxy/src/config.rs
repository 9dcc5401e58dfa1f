//! Startup configuration for the rajaongkir_proxy crate

use std::env;
use std::time::Duration;
use thiserror::Error;

pub const API_KEY_VAR: &str = "RAJAONGKIR_API_KEY";
pub const BASE_URL_VAR: &str = "RAJAONGKIR_BASE_URL";
pub const CACHE_TTL_VAR: &str = "RAJAONGKIR_CACHE_TTL_SECS";
pub const TIMEOUT_VAR: &str = "RAJAONGKIR_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "https://pro.rajaongkir.com/api";

/// Cached upstream documents stay fresh for one day
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(86_400);

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("RAJAONGKIR_API_KEY environment variable is not set")]
    MissingApiKey,

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// Settings read once at process startup.
///
/// Only the API key is required. Everything else falls back to the values the
/// public RajaOngkir Pro endpoint expects.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub api_key: String,
    pub base_url: String,
    pub cache_ttl: Duration,
    pub request_timeout: Duration,
}

impl ProxyConfig {
    /// Build a config with the given key and default values for the rest
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
            request_timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_cache_ttl(mut self, cache_ttl: Duration) -> Self {
        self.cache_ttl = cache_ttl;
        self
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let mut config = Self::new(api_key);

        if let Some(base_url) = lookup(BASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            config = config.with_base_url(base_url.trim());
        }
        if let Some(secs) = parse_secs(&lookup, CACHE_TTL_VAR)? {
            config = config.with_cache_ttl(secs);
        }
        if let Some(timeout) = parse_secs(&lookup, TIMEOUT_VAR)? {
            // A zero timeout would fail every outbound call
            if timeout.is_zero() {
                return Err(ConfigError::InvalidValue {
                    name: TIMEOUT_VAR.to_string(),
                    value: lookup(TIMEOUT_VAR).unwrap_or_default(),
                });
            }
            config = config.with_request_timeout(timeout);
        }

        Ok(config)
    }
}

fn parse_secs<F>(lookup: &F, name: &str) -> Result<Option<Duration>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(|secs| Some(Duration::from_secs(secs)))
            .map_err(|_| ConfigError::InvalidValue {
                name: name.to_string(),
                value: raw,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        // Given an environment without the API key
        let lookup = lookup_from(&[(BASE_URL_VAR, "http://localhost:1234")]);

        // When reading the configuration
        let result = ProxyConfig::from_lookup(lookup);

        // Then it should fail with MissingApiKey
        assert_eq!(result.unwrap_err(), ConfigError::MissingApiKey);
    }

    #[test]
    fn test_blank_api_key_is_an_error() {
        let lookup = lookup_from(&[(API_KEY_VAR, "   ")]);

        let result = ProxyConfig::from_lookup(lookup);

        assert_eq!(result.unwrap_err(), ConfigError::MissingApiKey);
    }

    #[test]
    fn test_defaults_applied() {
        // Given only the API key
        let lookup = lookup_from(&[(API_KEY_VAR, "secret")]);

        // When reading the configuration
        let config = ProxyConfig::from_lookup(lookup).unwrap();

        // Then every optional setting should use its default
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.cache_ttl, Duration::from_secs(86_400));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides_applied() {
        let lookup = lookup_from(&[
            (API_KEY_VAR, "secret"),
            (BASE_URL_VAR, "http://127.0.0.1:9000/api/"),
            (CACHE_TTL_VAR, "60"),
            (TIMEOUT_VAR, "5"),
        ]);

        let config = ProxyConfig::from_lookup(lookup).unwrap();

        assert_eq!(config.base_url, "http://127.0.0.1:9000/api");
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_ttl_is_reported() {
        let lookup = lookup_from(&[(API_KEY_VAR, "secret"), (CACHE_TTL_VAR, "one day")]);

        let result = ProxyConfig::from_lookup(lookup);

        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidValue {
                name: CACHE_TTL_VAR.to_string(),
                value: "one day".to_string(),
            }
        );
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        // Given a timeout of zero seconds
        let lookup = lookup_from(&[(API_KEY_VAR, "secret"), (TIMEOUT_VAR, "0")]);

        // When reading the configuration
        let result = ProxyConfig::from_lookup(lookup);

        // Then it should be reported as an invalid value
        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidValue {
                name: TIMEOUT_VAR.to_string(),
                value: "0".to_string(),
            }
        );
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::MissingApiKey.to_string(),
            "RAJAONGKIR_API_KEY environment variable is not set"
        );
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        // Save the current environment variable value if it exists
        let original_value = env::var(API_KEY_VAR).ok();

        unsafe {
            env::set_var(API_KEY_VAR, "from-env");
        }

        let config = ProxyConfig::from_env();

        // Restore the original value if it existed
        unsafe {
            if let Some(value) = original_value {
                env::set_var(API_KEY_VAR, value);
            } else {
                env::remove_var(API_KEY_VAR);
            }
        }

        assert_eq!(config.unwrap().api_key, "from-env");
    }

    #[test]
    #[serial]
    fn test_from_env_without_api_key() {
        let original_value = env::var(API_KEY_VAR).ok();

        unsafe {
            env::remove_var(API_KEY_VAR);
        }

        let result = ProxyConfig::from_env();

        unsafe {
            if let Some(value) = original_value {
                env::set_var(API_KEY_VAR, value);
            }
        }

        assert_eq!(result.unwrap_err(), ConfigError::MissingApiKey);
    }
}
