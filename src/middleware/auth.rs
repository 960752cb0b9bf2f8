//! Identity guard.
//!
//! Every todo and `/me` route carries `{userId}/{secret}` in its path. This middleware:
//! 1. Parses `userId` into a UUID (400 if malformed)
//! 2. Loads the user and compares the stored secret (401 if unknown or mismatched)
//! 3. Injects the resolved identity into the request for handlers to use

use axum::{
    extract::{Path, Request, State, rejection::PathRejection},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{error::AppError, state::AppState};

/// Authentication context attached to authenticated requests.
///
/// Inserted into the request's extension map; handlers extract it with
/// `Extension<AuthContext>`. All todo queries are scoped by `user_id`.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Id of the authenticated user
    pub user_id: Uuid,

    /// Display name of the authenticated user
    pub name: String,
}

/// Credential segments of the request path.
///
/// Routes with additional segments (e.g. `{todoId}`) still deserialize into this;
/// extra path parameters are ignored.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    #[serde(rename = "userId")]
    pub user_id: String,

    pub secret: String,
}

/// Identity guard middleware function.
///
/// # Flow
///
/// 1. Read `userId` and `secret` from the matched route's path parameters
/// 2. Parse `userId`; reject with 400 `Invalid userId format` if it is not a UUID
/// 3. Load the user; reject with 401 if absent or if the secret differs
/// 4. Inject `AuthContext` into the request and call the next handler
///
/// The secret comparison is plain string equality on a plaintext secret.
///
/// axum refuses to extract any path parameter once one of them is not valid UTF-8 after
/// percent-decoding. In that case the credential segments are decoded from the raw
/// path instead, so a bad `todoId` still reaches the handler (which answers 404).
///
/// # Arguments
///
/// * `State(state)` - Shared application state
/// * `path` - `userId` and `secret` path segments, or axum's rejection
/// * `request` - Incoming HTTP request (mutable to add extensions)
/// * `next` - Next middleware/handler in the chain
pub async fn identity_guard(
    State(state): State<AppState>,
    path: Result<Path<Credentials>, PathRejection>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_context = match path {
        Ok(Path(credentials)) => {
            authenticate(&state, &credentials.user_id, Some(credentials.secret.as_str())).await?
        }
        Err(rejection) => {
            tracing::debug!(%rejection, "Falling back to raw path segments");
            let (user_id, secret) = raw_credentials(request.uri().path())?;
            authenticate(&state, &user_id, secret.as_deref()).await?
        }
    };

    request.extensions_mut().insert(auth_context);

    Ok(next.run(request).await)
}

/// Decode `userId` and `secret` from a raw `/{resource}/{userId}/{secret}/...` path.
///
/// A secret that does not decode to UTF-8 is returned as `None`; it matches no user.
fn raw_credentials(path: &str) -> Result<(String, Option<String>), AppError> {
    let mut segments = path.split('/').skip(2);

    let user_id = segments
        .next()
        .and_then(|raw| urlencoding::decode(raw).ok())
        .ok_or(AppError::MalformedIdentity)?
        .into_owned();

    let secret = segments
        .next()
        .and_then(|raw| urlencoding::decode(raw).ok())
        .map(|secret| secret.into_owned());

    Ok((user_id, secret))
}

/// Resolve a claimed user id and secret to the user they identify.
pub async fn authenticate(
    state: &AppState,
    user_id: &str,
    secret: Option<&str>,
) -> Result<AuthContext, AppError> {
    let parsed_id = Uuid::parse_str(user_id).map_err(|_| {
        tracing::debug!(user_id, "Rejected malformed userId");
        AppError::MalformedIdentity
    })?;

    let user = state
        .store
        .find_user(parsed_id)
        .await?
        .filter(|user| Some(user.secret.as_str()) == secret)
        .ok_or_else(|| {
            tracing::warn!(user_id = %parsed_id, "Rejected invalid user or secret");
            AppError::Unauthorized
        })?;

    Ok(AuthContext {
        user_id: user.id,
        name: user.name,
    })
}
