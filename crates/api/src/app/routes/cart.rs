use std::sync::Arc;

use axum::{
    extract::{Extension, Form, Query},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use ajaxlab_cart::CartItem;

use crate::app::dto::CartUpdateParams;
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(current_cart))
        .route("/api/update", post(update_quantity))
}

pub async fn current_cart(Extension(services): Extension<Arc<AppServices>>) -> Json<Vec<CartItem>> {
    Json(services.cart.current_cart())
}

/// `productId` and `newQty` may come from the query string, a urlencoded
/// form, or both (query wins).
pub async fn update_quantity(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<CartUpdateParams>,
    form: Option<Form<CartUpdateParams>>,
) -> Response {
    let params = match form {
        Some(Form(form)) => query.or(form),
        None => query,
    };

    match apply_update(&services, &params) {
        Ok(Some(item)) => Json(item).into_response(),
        Ok(None) => errors::not_found("cart item"),
        Err(e) => errors::domain_error_to_response(e),
    }
}

fn apply_update(
    services: &AppServices,
    params: &CartUpdateParams,
) -> ajaxlab_core::DomainResult<Option<CartItem>> {
    let id = params.product_id()?;
    let qty = params.new_qty()?;
    services.cart.update_quantity(id, qty)
}
