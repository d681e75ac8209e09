//! `ajaxlab-auth` — toy login plus bearer-token verification.
//!
//! This crate is decoupled from HTTP: callers hand it header values and a
//! clock, it hands back an `AuthState`.

pub mod claims;
pub mod credentials;
pub mod login;
pub mod state;
pub mod token;

pub use claims::{TokenClaims, TokenValidationError, validate_claims};
pub use credentials::{AuthError, StaticCredentials};
pub use login::{Authenticator, IssuedToken};
pub use state::{AuthState, Identity, bearer_token};
pub use token::{Hs256TokenService, TokenError, TokenValidator};
