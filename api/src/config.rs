use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub jwt_secret: String,
    pub jwt_audience: String,
    /// An assessment answer counts once it is longer than this.
    pub quiz_min_answer_chars: usize,
    pub write_rate_per_second: u32,
    pub max_concurrent_requests: usize,
    pub request_timeout_secs: u64,
}

impl Config {
    /// Defaults for everything but the signing secret.
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            jwt_secret: jwt_secret.into(),
            jwt_audience: "authenticated".to_string(),
            quiz_min_answer_chars: 50,
            write_rate_per_second: 10,
            max_concurrent_requests: 256,
            request_timeout_secs: 30,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;
        let mut config = Self::new(jwt_secret);

        if let Some(audience) = lookup("JWT_AUDIENCE") {
            config.jwt_audience = audience;
        }
        config.bind_addr = parse_or(&lookup, "BIND_ADDR", config.bind_addr)?;
        config.quiz_min_answer_chars =
            parse_or(&lookup, "QUIZ_MIN_ANSWER_CHARS", config.quiz_min_answer_chars)?;
        config.write_rate_per_second =
            parse_or(&lookup, "WRITE_RATE_PER_SECOND", config.write_rate_per_second)?;
        config.max_concurrent_requests =
            parse_or(&lookup, "MAX_CONCURRENT_REQUESTS", config.max_concurrent_requests)?;
        config.request_timeout_secs =
            parse_or(&lookup, "REQUEST_TIMEOUT_SECS", config.request_timeout_secs)?;

        if config.write_rate_per_second == 0 {
            return Err(invalid("WRITE_RATE_PER_SECOND", "0"));
        }
        if config.max_concurrent_requests == 0 {
            return Err(invalid("MAX_CONCURRENT_REQUESTS", "0"));
        }
        if config.request_timeout_secs == 0 {
            return Err(invalid("REQUEST_TIMEOUT_SECS", "0"));
        }
        Ok(config)
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| invalid(name, &raw)),
    }
}

fn invalid(name: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        name,
        value: value.to_string(),
    }
}
