//! PostgreSQL implementation of [`Store`].

use async_trait::async_trait;
use uuid::Uuid;

use super::Store;
use crate::{
    db::DbPool,
    models::{
        todo::{Todo, TodoFields},
        user::User,
    },
};

/// [`Store`] backed by a sqlx connection pool.
///
/// Cloning is cheap; the pool is reference counted.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, secret, name, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn list_todos(&self, owner: Uuid) -> Result<Vec<Todo>, sqlx::Error> {
        sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, user_id, title, completed, created_at, updated_at
            FROM todos
            WHERE user_id = $1
            "#,
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await
    }

    async fn insert_todo(&self, owner: Uuid, fields: TodoFields) -> Result<Todo, sqlx::Error> {
        sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (user_id, title, completed)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, title, completed, created_at, updated_at
            "#,
        )
        .bind(owner)
        .bind(fields.title)
        .bind(fields.completed)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_todo(
        &self,
        id: Uuid,
        owner: Uuid,
        fields: TodoFields,
    ) -> Result<Option<Todo>, sqlx::Error> {
        // Both columns are written unconditionally: a missing field clears the value.
        sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos
            SET title = $3,
                completed = $4,
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, completed, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(owner)
        .bind(fields.title)
        .bind(fields.completed)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_todo(&self, id: Uuid, owner: Uuid) -> Result<Option<Todo>, sqlx::Error> {
        sqlx::query_as::<_, Todo>(
            r#"
            DELETE FROM todos
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, completed, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await
    }
}
