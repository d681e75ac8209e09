//! Runtime configuration, read from the environment with compiled-in defaults.

use std::net::SocketAddr;

use chrono::Duration;
use thiserror::Error;

use ajaxlab_auth::Hs256TokenService;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub jwt_secret: String,
    pub token_ttl: Duration,
}

impl ApiConfig {
    pub const BIND_VAR: &'static str = "AJAXLAB_BIND";
    pub const JWT_SECRET_VAR: &'static str = "JWT_SECRET";
    pub const TOKEN_TTL_VAR: &'static str = "AJAXLAB_TOKEN_TTL_SECS";

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let bind_addr = match lookup(Self::BIND_VAR) {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::Invalid {
                key: Self::BIND_VAR,
                message: format!("{e}"),
            })?,
            None => defaults.bind_addr,
        };

        let jwt_secret = match lookup(Self::JWT_SECRET_VAR) {
            Some(raw) if raw.is_empty() => {
                return Err(ConfigError::Invalid {
                    key: Self::JWT_SECRET_VAR,
                    message: "must not be empty".into(),
                });
            }
            Some(raw) => raw,
            None => {
                tracing::warn!("JWT_SECRET not set; using the compiled-in demo key");
                defaults.jwt_secret
            }
        };

        let token_ttl = match lookup(Self::TOKEN_TTL_VAR) {
            Some(raw) => {
                let secs: i64 = raw.trim().parse().map_err(|e| ConfigError::Invalid {
                    key: Self::TOKEN_TTL_VAR,
                    message: format!("{e}"),
                })?;
                if secs <= 0 {
                    return Err(ConfigError::Invalid {
                        key: Self::TOKEN_TTL_VAR,
                        message: "must be a positive number of seconds".into(),
                    });
                }
                Duration::seconds(secs)
            }
            None => defaults.token_ttl,
        };

        Ok(Self {
            bind_addr,
            jwt_secret,
            token_ttl,
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            jwt_secret: Hs256TokenService::DEFAULT_SECRET.to_string(),
            token_ttl: Duration::seconds(Hs256TokenService::DEFAULT_TTL_SECS),
        }
    }
}
