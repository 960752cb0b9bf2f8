//! User model.
//!
//! Users are provisioned out-of-band (directly in the `users` table). This service only
//! reads them to authenticate requests.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Represents a user record from the database.
///
/// # Database Table
///
/// Maps to the `users` table with columns:
/// - `id`: Unique identifier (UUID)
/// - `secret`: Shared secret presented in request paths
/// - `name`: Display name
/// - `created_at`: When the user was provisioned
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique identifier for this user
    pub id: Uuid,

    /// Plaintext shared secret.
    ///
    /// Compared by plain equality during authentication.
    pub secret: String,

    /// Human-readable display name
    pub name: String,

    pub created_at: DateTime<Utc>,
}

/// Response body for `GET /me/{userId}/{secret}`.
///
/// ```json
/// { "username": "Alice" }
/// ```
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub username: String,
}
