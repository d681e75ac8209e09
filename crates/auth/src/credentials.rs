use thiserror::Error;

use crate::state::Identity;
use crate::token::TokenError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error(transparent)]
    Token(#[from] TokenError),
}

/// A single compiled-in credential pair.
///
/// No lockout, no rate limit, no hashing: this is a login demo, not an
/// identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub const DEMO_USERNAME: &'static str = "admin";
    pub const DEMO_PASSWORD: &'static str = "1234";

    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The `admin` / `1234` pair.
    pub fn demo() -> Self {
        Self::new(Self::DEMO_USERNAME, Self::DEMO_PASSWORD)
    }

    /// Exact, case-sensitive match on both fields.
    pub fn verify(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        if username == self.username && password == self.password {
            Ok(Identity::new(username))
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_pair_verifies() {
        let id = StaticCredentials::demo().verify("admin", "1234").unwrap();
        assert_eq!(id.username(), "admin");
    }

    #[test]
    fn anything_else_fails() {
        let creds = StaticCredentials::demo();
        for (u, p) in [("admin", "12345"), ("Admin", "1234"), ("", ""), ("root", "1234")] {
            assert_eq!(creds.verify(u, p), Err(AuthError::InvalidCredentials));
        }
    }
}
