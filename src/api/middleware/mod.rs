//! HTTP middleware for authentication and request tracing.

pub mod admin_auth;
pub mod tracing;
