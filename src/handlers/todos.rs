//! Todo HTTP handlers.
//!
//! This module implements the todo API endpoints:
//! - GET /todos/:userId/:secret - List the user's todos
//! - POST /todos/:userId/:secret - Create a todo
//! - PUT /todos/:userId/:secret/:todoId - Overwrite a todo's title and completed flag
//! - DELETE /todos/:userId/:secret/:todoId - Delete a todo
//!
//! All routes run behind the identity guard, which supplies the `AuthContext`.

use axum::{
    Extension, Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    extract::LenientJson,
    middleware::auth::AuthContext,
    models::todo::{CreateTodoRequest, MessageResponse, Todo, UpdateTodoRequest},
    state::AppState,
};

/// Path of the single-todo routes: `(userId, secret, todoId)`.
type TodoPath = (String, String, String);

/// List all todos of the authenticated user.
///
/// # Response
///
/// - **Success (200 OK)**: Array of todos (may be empty), in storage order
/// - **Error (400/401)**: Rejected by the identity guard
pub async fn list_todos(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state.store.list_todos(auth.user_id).await?;

    Ok(Json(todos))
}

/// Create a todo.
///
/// # Request Body
///
/// ```json
/// {
///   "title": "buy milk",
///   "completed": false  // optional, defaults to false
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: The stored todo, including its assigned `_id`
/// - **Error (400)**: Malformed userId or unusable body
/// - **Error (401)**: Invalid user or secret
///
/// The owner is always the authenticated user; a `userId` in the body is ignored.
pub async fn create_todo(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    LenientJson(request): LenientJson<CreateTodoRequest>,
) -> Result<impl IntoResponse, AppError> {
    let todo = state
        .store
        .insert_todo(auth.user_id, request.into())
        .await?;

    tracing::debug!(todo_id = %todo.id, user_id = %auth.user_id, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// Overwrite a todo's `title` and `completed`.
///
/// # Request Body
///
/// ```json
/// {
///   "title": "buy oat milk",
///   "completed": true
/// }
/// ```
///
/// Both fields are written as given. A field missing from the body is cleared, not
/// preserved.
///
/// # Response
///
/// - **Success (200 OK)**: The updated todo
/// - **Error (404)**: No todo with this id belongs to the authenticated user
///
/// # Security Note
///
/// The update filters by BOTH todo id AND owner id, so another user's todo is
/// indistinguishable from a missing one. A `todoId` that is not a UUID matches nothing.
pub async fn update_todo(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    todo_path: Result<Path<TodoPath>, PathRejection>,
    LenientJson(request): LenientJson<UpdateTodoRequest>,
) -> Result<Json<Todo>, AppError> {
    let todo_id = parse_todo_id(todo_path)?;

    let todo = state
        .store
        .update_todo(todo_id, auth.user_id, request.into())
        .await?
        .ok_or(AppError::TodoNotFound)?;

    Ok(Json(todo))
}

/// Delete a todo.
///
/// # Response
///
/// - **Success (200 OK)**: `{ "message": "Todo deleted" }`
/// - **Error (404)**: No todo with this id belongs to the authenticated user,
///   including one that was already deleted
pub async fn delete_todo(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    todo_path: Result<Path<TodoPath>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let todo_id = parse_todo_id(todo_path)?;

    state
        .store
        .delete_todo(todo_id, auth.user_id)
        .await?
        .ok_or(AppError::TodoNotFound)?;

    Ok(Json(MessageResponse {
        message: "Todo deleted".to_string(),
    }))
}

/// A todo id that cannot be decoded or parsed can never match a stored todo, so it is
/// reported as missing.
fn parse_todo_id(todo_path: Result<Path<TodoPath>, PathRejection>) -> Result<Uuid, AppError> {
    let Path((_, _, raw)) = todo_path.map_err(|_| AppError::TodoNotFound)?;

    Uuid::parse_str(&raw).map_err(|_| AppError::TodoNotFound)
}
