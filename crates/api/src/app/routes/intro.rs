use axum::{Json, Router, routing::get};

use ajaxlab_catalog::{DemoUser, DeveloperProfile, demo_users, developer_profiles};

pub fn ch1_router() -> Router {
    Router::new()
        .route("/test", get(ch1_greeting))
        .route("/users", get(ch1_users))
}

pub fn ch1_2_router() -> Router {
    Router::new()
        .route("/test", get(ch1_2_greeting))
        .route("/users", get(ch1_2_users))
}

pub async fn ch1_greeting() -> &'static str {
    "Hello Ajax from Spring Boot!"
}

/// Served raw, `secret` included.
pub async fn ch1_users() -> Json<Vec<DemoUser>> {
    Json(demo_users())
}

pub async fn ch1_2_greeting() -> &'static str {
    "Hello Ajax"
}

pub async fn ch1_2_users() -> Json<Vec<DeveloperProfile>> {
    Json(developer_profiles())
}
