//! Startup configuration.
//!
//! Everything is read once from the process environment (after an optional
//! `.env` file has been loaded) and never mutated afterwards:
//! - `GROQ_API_KEY` - Required. Credential for the model provider.
//! - `SERPER_API_KEY` - Required. Credential for the search provider.
//! - `LANGCHAIN_PROJECT` - Optional. Project the run traces are tagged with.
//! - `LANGCHAIN_TRACING_V2` - Optional. Enables run tracing. Defaults to `false`.
//! - `MODEL_ID` - Optional. Defaults to `gemma2-9b-it`.
//! - `MODEL_API_BASE` - Optional. OpenAI-compatible endpoint. Defaults to Groq.
//! - `SERPER_API_BASE` - Optional. Defaults to `https://google.serper.dev`.
//! - `MAX_ITERATIONS` - Optional. Agent loop bound. Defaults to `15`.
//! - `HOST` / `PORT` - Optional. Defaults to `127.0.0.1` / `8501`.

use std::str::FromStr;

use secrecy::SecretString;

use super::ConfigError;

pub const DEFAULT_MODEL_ID: &str = "gemma2-9b-it";
pub const DEFAULT_MODEL_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_SEARCH_API_BASE: &str = "https://google.serper.dev";
pub const DEFAULT_MAX_ITERATIONS: usize = 15;

#[derive(Debug)]
pub struct Config {
    /// Model provider API key.
    pub model_credential: SecretString,

    /// Search provider API key.
    pub search_credential: SecretString,

    /// Project identifier attached to run traces.
    pub tracing_project_id: Option<String>,

    pub tracing_enabled: bool,

    pub model_id: String,

    pub model_api_base: String,

    pub search_api_base: String,

    /// Upper bound on think/act/observe cycles per question.
    pub max_iterations: usize,

    pub host: String,

    pub port: u16,
}

impl Config {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let require = |key: &str| get(key).ok_or_else(|| ConfigError::MissingEnvVar(key.into()));

        let model_credential = SecretString::from(require("GROQ_API_KEY")?);
        let search_credential = SecretString::from(require("SERPER_API_KEY")?);

        let tracing_enabled = match get("LANGCHAIN_TRACING_V2") {
            Some(value) => parse_bool("LANGCHAIN_TRACING_V2", &value)?,
            None => false,
        };

        Ok(Self {
            model_credential,
            search_credential,
            tracing_project_id: get("LANGCHAIN_PROJECT"),
            tracing_enabled,
            model_id: get("MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.into()),
            model_api_base: get("MODEL_API_BASE").unwrap_or_else(|| DEFAULT_MODEL_API_BASE.into()),
            search_api_base: get("SERPER_API_BASE")
                .unwrap_or_else(|| DEFAULT_SEARCH_API_BASE.into()),
            max_iterations: parse_or("MAX_ITERATIONS", get("MAX_ITERATIONS"), DEFAULT_MAX_ITERATIONS)?,
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".into()),
            port: parse_or("PORT", get("PORT"), 8501)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue(key.into(), value.into())),
    }
}

fn parse_or<T: FromStr>(key: &str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.into(), value)),
        None => Ok(default),
    }
}
