//! Configuration handling for the application.
//!
//! Everything comes from process environment variables read once at startup.
//! The Gemini API key is the only required value; the rest fall back to
//! development defaults so the service can run locally with a single
//! `GEMINI_API_KEY=... cargo run`.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable names. Keeping them public lets integration tests
/// refer to them without duplicating the strings.
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const ENV_GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_ALLOWED_ORIGINS: &str = "ALLOWED_ORIGINS";

/// Default values used when the corresponding variables are absent.
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173,http://localhost:8000,http://localhost:3000,https://news-neon-alpha-17.vercel.app";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    gemini_api_key: String,
    gemini_model: String,
    gemini_base_url: String,
    bind_addr: String,
    allowed_origins: Vec<String>,
}

impl Config {
    /// Create a new config explicitly. Used by tests; production code goes
    /// through [`Config::from_env`].
    pub fn new(
        gemini_api_key: impl Into<String>,
        gemini_model: impl Into<String>,
        gemini_base_url: impl Into<String>,
        bind_addr: impl Into<String>,
        allowed_origins: Vec<String>,
    ) -> Self {
        Self {
            gemini_api_key: gemini_api_key.into(),
            gemini_model: gemini_model.into(),
            gemini_base_url: gemini_base_url.into(),
            bind_addr: bind_addr.into(),
            allowed_origins,
        }
    }

    /// Load from environment variables.
    ///
    /// Fails only when `GEMINI_API_KEY` is missing or empty; every other
    /// value has a development default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let gemini_api_key = env::var(ENV_GEMINI_API_KEY).unwrap_or_default();
        if gemini_api_key.is_empty() {
            return Err(ConfigError::MissingVar {
                field: ENV_GEMINI_API_KEY,
            });
        }
        let gemini_model =
            env::var(ENV_GEMINI_MODEL).unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());
        let gemini_base_url =
            env::var(ENV_GEMINI_BASE_URL).unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string());
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let allowed_origins = parse_origins(
            &env::var(ENV_ALLOWED_ORIGINS).unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string()),
        );
        Ok(Self {
            gemini_api_key,
            gemini_model,
            gemini_base_url,
            bind_addr,
            allowed_origins,
        })
    }

    /// API key for the generative language model.
    pub fn gemini_api_key(&self) -> &str {
        &self.gemini_api_key
    }
    /// Model identifier, e.g. `gemini-2.5-flash`.
    pub fn gemini_model(&self) -> &str {
        &self.gemini_model
    }
    /// Base URL of the generative language API. Overridable so tests can
    /// point the client at a local mock server.
    pub fn gemini_base_url(&self) -> &str {
        &self.gemini_base_url
    }
    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Front-end origins allowed by CORS.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    MissingVar { field: &'static str },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingVar { field } => {
                write!(f, "missing required environment variable '{}'", field)
            }
        }
    }
}

impl Error for ConfigError {}
