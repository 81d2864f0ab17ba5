//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into [`LinkService`] calls and formats
//! responses according to the API contract.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication and request tracing middleware
//! - [`routes`] - Route configuration and composition
//!
//! [`LinkService`]: crate::application::services::LinkService

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
