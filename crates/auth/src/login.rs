use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::credentials::{AuthError, StaticCredentials};
use crate::state::Identity;
use crate::token::Hs256TokenService;

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub identity: Identity,
    pub expires_at: DateTime<Utc>,
}

/// Credential check + token issue.
#[derive(Debug, Clone)]
pub struct Authenticator {
    credentials: StaticCredentials,
    tokens: Arc<Hs256TokenService>,
}

impl Authenticator {
    pub fn new(credentials: StaticCredentials, tokens: Arc<Hs256TokenService>) -> Self {
        Self { credentials, tokens }
    }

    pub fn tokens(&self) -> &Arc<Hs256TokenService> {
        &self.tokens
    }

    /// No token is issued unless the pair matches exactly.
    pub fn login(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AuthError> {
        let identity = self.credentials.verify(username, password)?;
        let token = self.tokens.issue(&identity, now)?;
        tracing::info!(username = %identity, "login succeeded");
        Ok(IssuedToken {
            token,
            expires_at: now + self.tokens.ttl(),
            identity,
        })
    }
}
