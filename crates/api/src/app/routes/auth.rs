use std::sync::Arc;

use axum::{
    extract::Extension,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use crate::app::dto::{IdentityResponse, LoginRequest, TokenResponse};
use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::CurrentIdentity;

pub fn router() -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/me", get(me))
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<LoginRequest>,
) -> Response {
    match services.auth.login(&body.username, &body.password, Utc::now()) {
        Ok(issued) => Json(TokenResponse { token: issued.token }).into_response(),
        Err(e) => {
            tracing::info!(username = %body.username, "login rejected");
            errors::auth_error_to_response(e)
        }
    }
}

pub async fn me(identity: CurrentIdentity) -> Json<IdentityResponse> {
    Json(IdentityResponse {
        username: identity.username().to_string(),
    })
}
