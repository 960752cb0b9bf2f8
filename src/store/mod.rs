//! Persistence layer.
//!
//! Handlers never talk to the database directly; they go through the [`Store`] trait so
//! the HTTP layer can be exercised against an in-memory implementation in tests.
//!
//! Every todo operation takes the owner's id. There is deliberately no way to reach a
//! todo without it.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{
    todo::{Todo, TodoFields},
    user::User,
};

mod postgres;

pub use postgres::PgStore;

/// Data access used by the HTTP layer.
#[async_trait]
pub trait Store: Send + Sync {
    /// Verify the store is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;

    /// Look up a user by id.
    async fn find_user(&self, id: Uuid) -> Result<Option<User>, sqlx::Error>;

    /// All todos owned by `owner`, in storage order.
    async fn list_todos(&self, owner: Uuid) -> Result<Vec<Todo>, sqlx::Error>;

    /// Insert a new todo owned by `owner` and return it with its assigned id.
    async fn insert_todo(&self, owner: Uuid, fields: TodoFields) -> Result<Todo, sqlx::Error>;

    /// Overwrite `title` and `completed` of the todo matching `(id, owner)`.
    ///
    /// Returns `None` when no todo matches.
    async fn update_todo(
        &self,
        id: Uuid,
        owner: Uuid,
        fields: TodoFields,
    ) -> Result<Option<Todo>, sqlx::Error>;

    /// Delete the todo matching `(id, owner)` and return it.
    ///
    /// Returns `None` when no todo matches.
    async fn delete_todo(&self, id: Uuid, owner: Uuid) -> Result<Option<Todo>, sqlx::Error>;
}
