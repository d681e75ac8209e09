use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::token::TokenValidator;

/// Authenticated identity attached to a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(username: impl Into<String>) -> Self {
        Self(username.into())
    }

    pub fn username(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Identity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-request authentication state.
///
/// Token problems never reject a request on their own: they leave it
/// `Unauthenticated`, and only handlers that need an identity refuse it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated(Identity),
}

impl AuthState {
    /// Resolve the state from a raw `Authorization` header value.
    pub fn from_authorization(
        header: Option<&str>,
        validator: &dyn TokenValidator,
        now: DateTime<Utc>,
    ) -> Self {
        let Some(token) = header.and_then(bearer_token) else {
            return Self::Unauthenticated;
        };

        match validator.validate(token, now) {
            Ok(identity) => Self::Authenticated(identity),
            Err(e) => {
                tracing::warn!(error = %e, "bearer token rejected; continuing unauthenticated");
                Self::Unauthenticated
            }
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Unauthenticated => None,
        }
    }
}

/// Extract the token from `Bearer <token>`; anything else is `None`.
pub fn bearer_token(header: &str) -> Option<&str> {
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}
