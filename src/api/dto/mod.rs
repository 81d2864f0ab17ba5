//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Field-level
//! validation lives in [`crate::utils::validation`], not here.

pub mod health;
pub mod save;
