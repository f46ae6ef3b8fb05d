use std::env;
use std::net::SocketAddr;

/// Application-level constants
pub const APP_NAME: &str = "Aegis Emergency Management API";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default bind address when `AEGIS_ADDR` is not set.
pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";

/// Gemini model used for every task. The structured endpoints and the
/// chat endpoint differ only in generation config, not model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Base URL of the Generative Language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default log filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_CRATE_NAME"))
}

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub addr: SocketAddr,
    /// Gemini API key (`GEMINI_API_KEY`, required).
    pub api_key: String,
    /// Model name (`GEMINI_MODEL`, defaults to [`DEFAULT_MODEL`]).
    pub model: String,
    /// API base URL (`GEMINI_BASE_URL`, overridable for tests/proxies).
    pub base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("Invalid AEGIS_ADDR value {0:?}: {1}")]
    InvalidAddr(String, std::net::AddrParseError),
}

impl Config {
    /// Load configuration from the environment. Fails when the API
    /// key is absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let addr_str = env::var("AEGIS_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let addr = addr_str
            .parse()
            .map_err(|e| ConfigError::InvalidAddr(addr_str, e))?;

        Ok(Self {
            addr,
            api_key,
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_addr_parses() {
        let addr: SocketAddr = DEFAULT_ADDR.parse().unwrap();
        assert_eq!(addr.port(), 8000);
    }

    #[test]
    fn default_base_url_has_no_trailing_slash() {
        assert!(!DEFAULT_BASE_URL.ends_with('/'));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn log_filter_names_this_crate() {
        assert!(default_log_filter().contains("aegis_backend"));
    }
}
