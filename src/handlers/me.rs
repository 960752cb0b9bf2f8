//! Identity echo endpoint.

use axum::{Extension, Json};

use crate::{middleware::auth::AuthContext, models::user::MeResponse};

/// Return the authenticated user's display name.
///
/// # Endpoint
///
/// `GET /me/:userId/:secret`
///
/// # Response (200 OK)
///
/// ```json
/// { "username": "Alice" }
/// ```
pub async fn me(Extension(auth): Extension<AuthContext>) -> Json<MeResponse> {
    Json(MeResponse {
        username: auth.name,
    })
}
