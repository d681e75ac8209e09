use std::sync::Arc;

use axum::{
    extract::{Extension, OriginalUri, Path},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;

use ajaxlab_accounts::{AccountService, RestUser, RestUserDraft};
use ajaxlab_core::{CrudService, DomainResult, RecordId};

use crate::app::dto::{self, OrderRequest, OrderResponse, UserRequest, UserResponse};
use crate::app::errors;
use crate::app::routes::crud::{self, ResourceMapping};

/// `/api/ch3_1/users`: paged by default. Each user is shown with its orders.
pub struct UserResource {
    accounts: Arc<AccountService>,
}

impl ResourceMapping for UserResource {
    type Record = RestUser;
    type Body = UserRequest;
    type View = UserResponse;

    const DEFAULT_PAGE_SIZE: Option<u32> = Some(dto::DEFAULT_PAGE_SIZE);

    fn into_draft(body: UserRequest) -> DomainResult<RestUserDraft> {
        dto::require_text("name", &body.name)?;
        dto::require_text("email", &body.email)?;
        Ok(body.into())
    }

    fn view(&self, record: &RestUser) -> UserResponse {
        let orders = self.accounts.orders_for(record.id).unwrap_or_default();
        UserResponse::new(record, &orders)
    }
}

pub fn router(accounts: Arc<AccountService>) -> Router {
    let users: Arc<dyn CrudService<RestUser>> = accounts.clone();

    let mapping = UserResource {
        accounts: accounts.clone(),
    };

    let orders = Router::new()
        .route("/:id/orders", get(list_orders).post(create_order))
        .route("/:id/orders/:order_id", get(get_order))
        .layer(Extension(accounts));

    crud::resource_router(users, mapping).merge(orders)
}

pub async fn list_orders(
    Extension(accounts): Extension<Arc<AccountService>>,
    Path(user_id): Path<RecordId>,
) -> Response {
    match accounts.orders_for(user_id) {
        Some(orders) => Json(orders.iter().map(OrderResponse::from).collect::<Vec<_>>()).into_response(),
        None => errors::not_found("user"),
    }
}

pub async fn get_order(
    Extension(accounts): Extension<Arc<AccountService>>,
    Path((user_id, order_id)): Path<(RecordId, RecordId)>,
) -> Response {
    match accounts.order_for(user_id, order_id) {
        Some(order) => Json(OrderResponse::from(&order)).into_response(),
        None => errors::not_found("order"),
    }
}

pub async fn create_order(
    Extension(accounts): Extension<Arc<AccountService>>,
    Path(user_id): Path<RecordId>,
    OriginalUri(uri): OriginalUri,
    Json(body): Json<OrderRequest>,
) -> Response {
    match accounts.create_order_for_user(user_id, body.into(), Utc::now()) {
        Some(order) => crud::created(&uri, order.id, Json(OrderResponse::from(&order))),
        None => errors::not_found("user"),
    }
}
