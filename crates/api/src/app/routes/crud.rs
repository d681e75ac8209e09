//! Generic list/get/create/replace/delete over any `CrudService`.

use std::sync::Arc;

use axum::{
    extract::{Extension, OriginalUri, Path, Query},
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Serialize, de::DeserializeOwned};

use ajaxlab_core::{CrudService, DomainResult, Record, RecordId, Resource};

use crate::app::dto::ListParams;
use crate::app::errors;

/// How one resource crosses the HTTP boundary: request body in, view out.
pub trait ResourceMapping: Send + Sync + 'static {
    type Record: Resource;
    type Body: DeserializeOwned + Send + 'static;
    type View: Serialize;

    /// Page size applied when the client sends no paging parameters.
    /// `None` lists everything.
    const DEFAULT_PAGE_SIZE: Option<u32>;

    fn into_draft(body: Self::Body) -> DomainResult<<Self::Record as Resource>::Draft>;

    fn view(&self, record: &Self::Record) -> Self::View;
}

type Service<M> = Arc<dyn CrudService<<M as ResourceMapping>::Record>>;

pub fn resource_router<M: ResourceMapping>(service: Service<M>, mapping: M) -> Router {
    Router::new()
        .route("/", get(list::<M>).post(create::<M>))
        .route("/:id", get(fetch::<M>).put(replace::<M>).delete(remove::<M>))
        .layer(Extension(service))
        .layer(Extension(Arc::new(mapping)))
}

async fn list<M: ResourceMapping>(
    Extension(service): Extension<Service<M>>,
    Extension(mapping): Extension<Arc<M>>,
    Query(params): Query<ListParams>,
) -> Response {
    let page = params
        .into_query(M::DEFAULT_PAGE_SIZE)
        .and_then(|query| service.list(&query));
    match page {
        Ok(page) => Json(page.map(|r| mapping.view(&r))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn fetch<M: ResourceMapping>(
    Extension(service): Extension<Service<M>>,
    Extension(mapping): Extension<Arc<M>>,
    Path(id): Path<RecordId>,
) -> Response {
    match service.get(id) {
        Some(record) => Json(mapping.view(&record)).into_response(),
        None => errors::not_found("resource"),
    }
}

async fn create<M: ResourceMapping>(
    Extension(service): Extension<Service<M>>,
    Extension(mapping): Extension<Arc<M>>,
    OriginalUri(uri): OriginalUri,
    Json(body): Json<M::Body>,
) -> Response {
    let draft = match M::into_draft(body) {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let record = service.create(draft);
    created(&uri, record.id(), Json(mapping.view(&record)))
}

async fn replace<M: ResourceMapping>(
    Extension(service): Extension<Service<M>>,
    Extension(mapping): Extension<Arc<M>>,
    Path(id): Path<RecordId>,
    Json(body): Json<M::Body>,
) -> Response {
    let draft = match M::into_draft(body) {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match service.replace(id, draft) {
        Some(record) => Json(mapping.view(&record)).into_response(),
        None => errors::not_found("resource"),
    }
}

async fn remove<M: ResourceMapping>(
    Extension(service): Extension<Service<M>>,
    Path(id): Path<RecordId>,
) -> StatusCode {
    service.delete(id);
    StatusCode::NO_CONTENT
}

/// `201 Created` with `Location` = request path + `/{id}`.
pub fn created(uri: &Uri, id: RecordId, body: impl IntoResponse) -> Response {
    let location = format!("{}/{id}", uri.path().trim_end_matches('/'));
    match HeaderValue::from_str(&location) {
        Ok(value) => (StatusCode::CREATED, [(header::LOCATION, value)], body).into_response(),
        Err(_) => (StatusCode::CREATED, body).into_response(),
    }
}
