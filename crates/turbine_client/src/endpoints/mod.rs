//! Typed endpoint wrappers over [`crate::ApiClient::request`].
//!
//! Route shapes and payloads mirror the remote API; every wrapper funnels
//! through the same normalized request path, so retry and outcome semantics
//! are identical across endpoints.

mod pastes;
mod users;
