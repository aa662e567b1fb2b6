use std::fmt;
use std::str::FromStr;

/// Gemini client settings.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    /// Model name (e.g., "gemini-2.5-flash").
    pub model: String,
    /// Base endpoint URL.
    pub endpoint: String,
    pub temperature: f32,
    /// Request timeout in seconds; the only bound on generation latency.
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-2.5-flash".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            temperature: 0.7,
            timeout_secs: 120,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Raw SESSION_KEY value, if set.
    pub session_key: Option<String>,
    pub session_ttl_secs: u64,
    /// Human language the slides are written in.
    pub language: String,
    pub gemini: GeminiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{key} environment variable not set"),
            ConfigError::Invalid { key, value } => write!(f, "invalid value for {key}: {value:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    /// Load from the process environment, after reading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env file loaded: {e}");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = GeminiConfig::default();

        let api_key = get("GEMINI_API_KEY")
            .or_else(|| get("API_KEY"))
            .ok_or(ConfigError::Missing("GEMINI_API_KEY"))?;

        let gemini = GeminiConfig {
            api_key,
            model: get("GEMINI_MODEL").unwrap_or(defaults.model),
            endpoint: get("GEMINI_ENDPOINT").unwrap_or(defaults.endpoint),
            temperature: parse_or("GEMINI_TEMPERATURE", get("GEMINI_TEMPERATURE"), defaults.temperature)?,
            timeout_secs: parse_or("GEMINI_TIMEOUT_SECS", get("GEMINI_TIMEOUT_SECS"), defaults.timeout_secs)?,
        };

        Ok(Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
            session_key: get("SESSION_KEY"),
            session_ttl_secs: parse_or("SESSION_TTL_SECS", get("SESSION_TTL_SECS"), 3600)?,
            language: get("SLIDES_LANGUAGE").unwrap_or_else(|| "Spanish".to_string()),
            gemini,
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
