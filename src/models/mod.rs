//! Data models representing stored records and API payloads.

/// Todo items and their request/response bodies
pub mod todo;
/// Registered users
pub mod user;
