use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Result,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::{
    error::todo::TodoError,
    state::AppState,
    store::{NewTodo, PatchTodo, Todo},
};

pub fn route_todo() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create).delete(clear))
        .route("/{id}", get(find).patch(patch).delete(remove))
}

#[tracing::instrument]
pub async fn list(State(AppState { todos, .. }): State<AppState>) -> Result<Json<Vec<Todo>>> {
    Ok(Json(todos.list().await?))
}

#[tracing::instrument]
pub async fn create(
    State(AppState { todos, .. }): State<AppState>,
    Json(new): Json<NewTodo>,
) -> Result<(StatusCode, Json<Todo>)> {
    let created = todos.create(new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[tracing::instrument]
pub async fn clear(State(AppState { todos, .. }): State<AppState>) -> Result<StatusCode> {
    todos.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}

#[tracing::instrument]
pub async fn find(State(AppState { todos, .. }): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<Todo>> {
    let todo = todos.get(id).await?.ok_or(TodoError::NotFound(id))?;
    Ok(Json(todo))
}

#[tracing::instrument]
pub async fn patch(
    State(AppState { todos, .. }): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<PatchTodo>,
) -> Result<Json<Todo>> {
    Ok(Json(todos.update(id, patch).await?))
}

#[tracing::instrument]
pub async fn remove(State(AppState { todos, .. }): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode> {
    todos.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
