//! HTTP request handlers (route handlers).
//!
//! Each handler receives the resolved identity and request data, performs one store
//! operation, and returns a JSON response.

/// Root and health check endpoints
pub mod health;
/// Identity echo endpoint
pub mod me;
/// Todo CRUD endpoints
pub mod todos;
