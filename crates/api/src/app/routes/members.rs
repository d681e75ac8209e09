use std::sync::Arc;

use axum::{
    extract::{Extension, OriginalUri, Path},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use ajaxlab_core::{DomainResult, RecordId};

use crate::app::dto::{self, MemberCreateRequest, MemberResponse};
use crate::app::errors;
use crate::app::routes::crud;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_members).post(register_member))
        .route("/:id", get(get_member))
}

/// Members only ever leave through `MemberResponse`.
pub async fn list_members(
    Extension(services): Extension<Arc<AppServices>>,
) -> Json<Vec<MemberResponse>> {
    Json(services.members.all().iter().map(MemberResponse::from).collect())
}

pub async fn get_member(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<RecordId>,
) -> Response {
    match services.members.find(id) {
        Some(member) => Json(MemberResponse::from(&member)).into_response(),
        None => errors::not_found("user"),
    }
}

pub async fn register_member(
    Extension(services): Extension<Arc<AppServices>>,
    OriginalUri(uri): OriginalUri,
    Json(body): Json<MemberCreateRequest>,
) -> Response {
    if let Err(e) = validate(&body) {
        return errors::domain_error_to_response(e);
    }
    let member = services.members.register(body.into());
    crud::created(&uri, member.id, Json(MemberResponse::from(&member)))
}

fn validate(body: &MemberCreateRequest) -> DomainResult<()> {
    dto::require_text("username", &body.username)?;
    dto::require_text("email", &body.email)?;
    dto::require_text("password", &body.password)
}
