//! HTTP middleware components.
//!
//! Middleware run before route handlers and can short-circuit a request
//! (e.g. reject unauthenticated callers) before it reaches the handler.

/// User id + shared secret authentication
pub mod auth;
