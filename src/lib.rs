//! Todo Service
//!
//! A REST API for per-user todo lists. Every resource route carries the caller's user id
//! and shared secret as path segments; requests are authenticated by the identity guard
//! and all todo operations are scoped to the authenticated user.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx, behind the [`store::Store`] trait
//! - **Authentication**: `{userId}/{secret}` path segments checked by [`middleware::auth`]
//! - **Format**: JSON requests/responses
//!
//! # Routes
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/` | 200 plain text |
//! | GET | `/health` | 200 status JSON |
//! | GET | `/me/{userId}/{secret}` | 200 `{username}` |
//! | GET | `/todos/{userId}/{secret}` | 200 `[todo...]` |
//! | POST | `/todos/{userId}/{secret}` | 201 todo |
//! | PUT | `/todos/{userId}/{secret}/{todoId}` | 200 todo |
//! | DELETE | `/todos/{userId}/{secret}/{todoId}` | 200 `{message}` |

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod state;
pub mod store;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use error::AppError;
pub use state::AppState;

/// Build the HTTP router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    // Routes behind the identity guard
    let authenticated_routes = Router::new()
        .route("/me/{userId}/{secret}", get(handlers::me::me))
        .route(
            "/todos/{userId}/{secret}",
            get(handlers::todos::list_todos).post(handlers::todos::create_todo),
        )
        .route(
            "/todos/{userId}/{secret}/{todoId}",
            put(handlers::todos::update_todo).delete(handlers::todos::delete_todo),
        )
        // route_layer: runs only for matched routes, after path parameters are known
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::identity_guard,
        ));

    Router::new()
        // Public routes (no authentication required)
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health_check))
        .merge(authenticated_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
