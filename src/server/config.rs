use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Single browser origin allowed to call the API with credentials.
    pub cors_allowed_origin: String,

    pub session_secure: bool,
    pub session_expiry_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: std::env::var("APP_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_or_default("APP_PORT", DEFAULT_PORT)?,
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_CORS_ALLOWED_ORIGIN.to_string()),
            session_secure: parse_or_default("SESSION_SECURE", false)?,
            session_expiry_days: parse_or_default(
                "SESSION_EXPIRY_DAYS",
                DEFAULT_SESSION_EXPIRY_DAYS,
            )?,
        })
    }

    /// Socket address string the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Reads an optional environment variable, falling back to `default` when unset.
fn parse_or_default<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
