//! Shared helpers for router integration tests.
//!
//! The router is driven with `tower::ServiceExt::oneshot` against an in-memory
//! `Store`, so no database is required.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use chrono::Utc;
use serde_json::Value;
use todo_web_server::{
    AppState,
    models::{
        todo::{Todo, TodoFields},
        user::User,
    },
    router,
    store::Store,
};
use tower::ServiceExt;
use uuid::Uuid;

/// Test user A.
pub fn alice() -> User {
    User {
        id: Uuid::parse_str("00000000-0000-0000-0000-00000000000a").unwrap(),
        secret: "alice-secret".to_string(),
        name: "Alice".to_string(),
        created_at: Utc::now(),
    }
}

/// Test user B.
pub fn bob() -> User {
    User {
        id: Uuid::parse_str("00000000-0000-0000-0000-00000000000b").unwrap(),
        secret: "bob-secret".to_string(),
        name: "Bob".to_string(),
        created_at: Utc::now(),
    }
}

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    todos: Vec<Todo>,
}

/// In-memory `Store` with the same scoping rules as the Postgres implementation.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
    offline: bool,
}

impl MemoryStore {
    pub fn with_users(users: Vec<User>) -> Self {
        let store = Self::default();
        store.tables.lock().unwrap().users = users;
        store
    }

    /// A store whose every operation fails, as if the database were unreachable.
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    /// Every stored todo, regardless of owner.
    pub fn all_todos(&self) -> Vec<Todo> {
        self.tables.lock().unwrap().todos.clone()
    }

    fn check_online(&self) -> Result<(), sqlx::Error> {
        if self.offline {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        self.check_online()
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        self.check_online()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|user| user.id == id).cloned())
    }

    async fn list_todos(&self, owner: Uuid) -> Result<Vec<Todo>, sqlx::Error> {
        self.check_online()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .todos
            .iter()
            .filter(|todo| todo.user_id == owner)
            .cloned()
            .collect())
    }

    async fn insert_todo(&self, owner: Uuid, fields: TodoFields) -> Result<Todo, sqlx::Error> {
        self.check_online()?;
        let now = Utc::now();
        let todo = Todo {
            id: Uuid::new_v4(),
            user_id: owner,
            title: fields.title,
            completed: fields.completed,
            created_at: now,
            updated_at: now,
        };
        self.tables.lock().unwrap().todos.push(todo.clone());
        Ok(todo)
    }

    async fn update_todo(
        &self,
        id: Uuid,
        owner: Uuid,
        fields: TodoFields,
    ) -> Result<Option<Todo>, sqlx::Error> {
        self.check_online()?;
        let mut tables = self.tables.lock().unwrap();
        Ok(tables
            .todos
            .iter_mut()
            .find(|todo| todo.id == id && todo.user_id == owner)
            .map(|todo| {
                todo.title = fields.title;
                todo.completed = fields.completed;
                todo.updated_at = Utc::now();
                todo.clone()
            }))
    }

    async fn delete_todo(&self, id: Uuid, owner: Uuid) -> Result<Option<Todo>, sqlx::Error> {
        self.check_online()?;
        let mut tables = self.tables.lock().unwrap();
        let position = tables
            .todos
            .iter()
            .position(|todo| todo.id == id && todo.user_id == owner);
        Ok(position.map(|index| tables.todos.remove(index)))
    }
}

/// Router plus a handle on its backing store, seeded with `alice()` and `bob()`.
pub fn test_app() -> (Router, MemoryStore) {
    let store = MemoryStore::with_users(vec![alice(), bob()]);
    (router(AppState::new(store.clone())), store)
}

/// Path prefix carrying a user's credentials, e.g. `/todos/<id>/<secret>`.
pub fn todos_path(user: &User) -> String {
    format!("/todos/{}/{}", user.id, user.secret)
}

pub fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);

    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send one request and return the status and decoded JSON body.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, body)
}

/// Create a todo as `user` and return its `_id`.
pub async fn create_todo(app: &Router, user: &User, body: Value) -> String {
    let (status, todo) = send(app, request(Method::POST, &todos_path(user), Some(body))).await;
    assert_eq!(status, StatusCode::CREATED);
    todo["_id"].as_str().unwrap().to_string()
}
