//! Todo data models and API request/response types.
//!
//! This module defines:
//! - `Todo`: Database entity representing a todo item
//! - `TodoFields`: The user-editable columns written by create and update
//! - `CreateTodoRequest` / `UpdateTodoRequest`: Request bodies
//! - `MessageResponse`: Confirmation body returned by delete

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Represents a todo record from the database.
///
/// # Database Table
///
/// Maps to the `todos` table. Each todo belongs to one user (via `user_id`), but the
/// column is not a foreign key: ownership is enforced by filtering every query on it.
///
/// # JSON Shape
///
/// ```json
/// {
///   "_id": "550e8400-e29b-41d4-a716-446655440000",
///   "userId": "660e8400-e29b-41d4-a716-446655440001",
///   "title": "buy milk",
///   "completed": false,
///   "createdAt": "2025-12-20T10:00:00Z",
///   "updatedAt": "2025-12-20T10:00:00Z"
/// }
/// ```
///
/// `title` and `completed` are omitted from the JSON when they are not set.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier assigned by the database
    #[serde(rename = "_id")]
    pub id: Uuid,

    /// Identity of the owning user
    pub user_id: Uuid,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,

    pub created_at: DateTime<Utc>,

    /// Refreshed on every update
    pub updated_at: DateTime<Utc>,
}

/// Values written to the `title` and `completed` columns.
///
/// `None` is stored as NULL. Updates write both columns unconditionally, so a field
/// missing from an update body clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFields {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Request body for creating a todo.
///
/// # JSON Example
///
/// ```json
/// {
///   "title": "buy milk",
///   "completed": false
/// }
/// ```
///
/// # Validation
///
/// - `title`: Expected but not enforced; a missing title is stored as NULL
/// - `completed`: Optional, defaults to `false` when omitted; an explicit `null` is
///   stored as NULL
///
/// Any other field, including `userId`, is ignored. The owner always comes from the
/// authenticated identity.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,

    /// Outer `None`: field omitted. `Some(None)`: explicit `null`.
    #[serde(default, deserialize_with = "present")]
    pub completed: Option<Option<bool>>,
}

impl From<CreateTodoRequest> for TodoFields {
    fn from(request: CreateTodoRequest) -> Self {
        Self {
            title: request.title,
            completed: request.completed.unwrap_or(Some(false)),
        }
    }
}

/// Marks a field as present, keeping an explicit `null` distinct from an omitted field.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Request body for updating a todo.
///
/// Both fields are overwritten with whatever the body carries. An omitted field is
/// written as NULL rather than left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,

    pub completed: Option<bool>,
}

impl From<UpdateTodoRequest> for TodoFields {
    fn from(request: UpdateTodoRequest) -> Self {
        Self {
            title: request.title,
            completed: request.completed,
        }
    }
}

/// Generic confirmation body.
///
/// ```json
/// { "message": "Todo deleted" }
/// ```
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
