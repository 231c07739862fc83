// src/config.rs
//! Process configuration, read once at startup from the environment.

use std::{env, path::PathBuf, str::FromStr, time::Duration};

use anyhow::{Context, bail};

pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://arunregmi.com.np";
pub const DEFAULT_COMPLETION_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_COMPLETION_MODEL: &str = "llama-3.1-8b-instant";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => bail!("unknown environment `{other}` (expected development or production)"),
        }
    }
}

/// Settings for the remote completion provider.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Bearer credential. When absent the chat endpoint answers from the
    /// local fallback rules only.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Upper bound on a single outbound completion call.
    pub timeout: Duration,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_COMPLETION_BASE_URL.to_string(),
            model: DEFAULT_COMPLETION_MODEL.to_string(),
            max_tokens: 800,
            temperature: 0.7,
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// Origin allowed by CORS in production.
    pub allowed_origin: String,
    /// Directory holding the site assets and `index.html`.
    pub static_dir: PathBuf,
    pub completion: CompletionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: Environment::Development,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            static_dir: PathBuf::from("public"),
            completion: CompletionConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Unset or blank
    /// variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();
        let completion_defaults = defaults.completion.clone();

        let timeout_secs: u64 = parse_or(&var, "COMPLETION_TIMEOUT_SECS", 10)?;
        if timeout_secs == 0 {
            bail!("COMPLETION_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Self {
            host: var("HOST").unwrap_or(defaults.host),
            port: parse_or(&var, "PORT", defaults.port)?,
            environment: parse_or(&var, "APP_ENV", defaults.environment)?,
            allowed_origin: var("ALLOWED_ORIGIN").unwrap_or(defaults.allowed_origin),
            static_dir: var("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            completion: CompletionConfig {
                api_key: var("GROQ_API_KEY"),
                base_url: var("COMPLETION_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or(completion_defaults.base_url),
                model: var("COMPLETION_MODEL").unwrap_or(completion_defaults.model),
                max_tokens: parse_or(&var, "COMPLETION_MAX_TOKENS", completion_defaults.max_tokens)?,
                temperature: parse_or(
                    &var,
                    "COMPLETION_TEMPERATURE",
                    completion_defaults.temperature,
                )?,
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Value sent in `Access-Control-Allow-Origin`.
    pub fn cors_origin(&self) -> &str {
        if self.environment.is_production() {
            &self.allowed_origin
        } else {
            "*"
        }
    }
}

fn parse_or<T, V>(var: &V, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    V: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("invalid value for {key}: `{raw}`")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.cors_origin(), "*");
        assert!(config.completion.api_key.is_none());
        assert_eq!(config.completion.timeout, Duration::from_secs(10));
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn production_restricts_origin() {
        let config = Config::from_lookup(lookup(&[
            ("APP_ENV", "production"),
            ("ALLOWED_ORIGIN", "https://example.org"),
            ("PORT", "8080"),
            ("GROQ_API_KEY", "key"),
            ("COMPLETION_BASE_URL", "http://localhost:9000/v1/"),
        ]))
        .unwrap();
        assert!(config.environment.is_production());
        assert_eq!(config.cors_origin(), "https://example.org");
        assert_eq!(config.port, 8080);
        assert_eq!(config.completion.api_key.as_deref(), Some("key"));
        assert_eq!(config.completion.base_url, "http://localhost:9000/v1");
    }

    #[test]
    fn blank_credential_is_treated_as_unset() {
        let config = Config::from_lookup(lookup(&[("GROQ_API_KEY", "  ")])).unwrap();
        assert!(config.completion.api_key.is_none());
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(Config::from_lookup(lookup(&[("PORT", "not-a-port")])).is_err());
        assert!(Config::from_lookup(lookup(&[("APP_ENV", "staging")])).is_err());
        assert!(Config::from_lookup(lookup(&[("COMPLETION_TIMEOUT_SECS", "0")])).is_err());
    }
}
