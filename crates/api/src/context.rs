use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Response;

use ajaxlab_auth::{AuthState, Identity};
use ajaxlab_core::DomainError;

use crate::app::errors;

/// Authenticated identity for a request.
///
/// Extracting this is the only place a request is refused for lack of
/// authentication; the middleware itself never rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentIdentity(pub Identity);

impl CurrentIdentity {
    pub fn username(&self) -> &str {
        self.0.username()
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for CurrentIdentity
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<AuthState>() {
            Some(AuthState::Authenticated(identity)) => Ok(Self(identity.clone())),
            _ => Err(errors::domain_error_to_response(DomainError::Unauthenticated)),
        }
    }
}
