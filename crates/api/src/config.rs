use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;

use crate::auth::jwt::{AuthConfig, KeySource};

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("exactly one of AUTH_SECRET or AUTH_PUBLIC_KEY_PEM must be set")]
    AmbiguousKey,

    #[error("failed to read public key {path}: {source}")]
    KeyFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid verification key: {0}")]
    Key(#[from] jsonwebtoken::errors::Error),
}

/// Which origins may call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

/// Server configuration loaded from environment variables.
///
/// Everything except the database URL and the auth settings has a default
/// suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Connection pool size (default: `10`).
    pub database_max_connections: u32,
    /// Bearer token verification settings.
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                    | Default  |
    /// |----------------------------|----------|
    /// | `DATABASE_URL`             | required |
    /// | `HOST`                     | `0.0.0.0`|
    /// | `PORT`                     | `8080`   |
    /// | `CORS_ORIGINS`             | `*`      |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`     |
    /// | `DATABASE_MAX_CONNECTIONS` | `10`     |
    /// | `AUTH_ISSUER`              | required |
    /// | `AUTH_AUDIENCE`            | required |
    /// | `AUTH_SECRET`              | --       |
    /// | `AUTH_PUBLIC_KEY_PEM`      | --       |
    /// | `AUTH_LEEWAY_SECS`         | `0`      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = required(&lookup, "DATABASE_URL")?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 8080)?;
        let cors_origins = parse_cors_origins(lookup("CORS_ORIGINS"))?;
        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;
        let database_max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?;

        let issuer = required(&lookup, "AUTH_ISSUER")?;
        let audience = required(&lookup, "AUTH_AUDIENCE")?;
        let key = match (
            non_empty(lookup("AUTH_SECRET")),
            non_empty(lookup("AUTH_PUBLIC_KEY_PEM")),
        ) {
            (Some(secret), None) => KeySource::Secret(secret),
            (None, Some(path)) => KeySource::RsaPublicKeyPem(PathBuf::from(path)),
            _ => return Err(ConfigError::AmbiguousKey),
        };
        let leeway_secs = parse_or(&lookup, "AUTH_LEEWAY_SECS", 0)?;

        Ok(Self {
            database_url,
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_max_connections,
            auth: AuthConfig {
                issuer,
                audience,
                key,
                leeway_secs,
            },
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<String, ConfigError> {
    non_empty(lookup(var)).ok_or(ConfigError::Missing(var))
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match non_empty(lookup(var)) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|err: T::Err| ConfigError::Invalid {
            var,
            reason: err.to_string(),
            value,
        }),
    }
}

fn parse_cors_origins(raw: Option<String>) -> Result<CorsOrigins, ConfigError> {
    let raw = raw.unwrap_or_else(|| "*".into());
    let origins: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() || origins.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    origins
        .into_iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|err| ConfigError::Invalid {
                var: "CORS_ORIGINS",
                value: origin.to_string(),
                reason: err.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
