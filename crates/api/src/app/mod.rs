//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: store and service wiring (one shared instance per app)
//! - `routes/`: HTTP routes + handlers (one file per tutorial area)
//! - `dto.rs`: request/response DTOs and the mappers between them and records
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    let services = Arc::new(services::build_services(config));
    build_app_with(services)
}

/// Build the router around already-wired services.
pub fn build_app_with(services: Arc<services::AppServices>) -> Router {
    let auth_state = middleware::AuthLayerState {
        tokens: services.auth.tokens().clone(),
    };

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router(&services))
        .layer(Extension(services))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::trace_requests))
                .layer(axum::middleware::from_fn_with_state(
                    auth_state,
                    middleware::auth_middleware,
                )),
        )
}
