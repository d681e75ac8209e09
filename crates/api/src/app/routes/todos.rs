use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use ajaxlab_catalog::BoardTodo;
use ajaxlab_core::{CrudService, DomainResult, RecordId};
use ajaxlab_todos::{Todo, TodoDraft};

use crate::app::dto::{self, BoardParams, TodoRequest, TodoResponse};
use crate::app::errors;
use crate::app::routes::crud::{self, ResourceMapping};
use crate::app::services::AppServices;

/// `/ch2/todos`: listed whole unless the client asks for a page.
pub struct TodoResource;

impl ResourceMapping for TodoResource {
    type Record = Todo;
    type Body = TodoRequest;
    type View = TodoResponse;

    const DEFAULT_PAGE_SIZE: Option<u32> = None;

    fn into_draft(body: TodoRequest) -> DomainResult<TodoDraft> {
        dto::require_text("title", &body.title)?;
        Ok(body.into())
    }

    fn view(&self, record: &Todo) -> TodoResponse {
        record.into()
    }
}

pub fn router(todos: Arc<dyn CrudService<Todo>>) -> Router {
    crud::resource_router(todos, TodoResource)
}

/// `/ch2_3/api/todo`: the read-only board.
pub fn board_router() -> Router {
    Router::new()
        .route("/", get(list_board))
        .route("/:id", get(get_board_todo))
}

pub async fn list_board(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<BoardParams>,
) -> Json<Vec<BoardTodo>> {
    let items = match params.user_id {
        Some(user_id) => services.board.by_user(user_id).into_iter().cloned().collect(),
        None => services.board.all().to_vec(),
    };
    Json(items)
}

pub async fn get_board_todo(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<RecordId>,
) -> Response {
    match services.board.by_id(id) {
        Some(todo) => Json(todo.clone()).into_response(),
        None => errors::not_found("todo"),
    }
}
