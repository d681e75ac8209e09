use axum::{Router, routing::post};

use crate::app::services::AppServices;

pub mod accounts;
pub mod auth;
pub mod cart;
pub mod crud;
pub mod intro;
pub mod members;
pub mod system;
pub mod todos;
pub mod upload;

/// Every chapter's routes. Authentication is resolved by middleware; only
/// handlers taking a `CurrentIdentity` refuse anonymous callers.
pub fn router(services: &AppServices) -> Router {
    Router::new()
        .nest("/ch1", intro::ch1_router())
        .nest("/ch1_2", intro::ch1_2_router())
        .nest("/ch1_1/cart", cart::router())
        .nest("/ch2/todos", todos::router(services.todos.clone()))
        .nest("/ch2_3/api/todo", todos::board_router())
        .nest("/ch3/users", members::router())
        .nest("/ch4", auth::router())
        .route("/ch5/upload", post(upload::upload))
        .nest("/api/ch3_1/users", accounts::router(services.accounts.clone()))
}
