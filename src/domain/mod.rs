//! Domain layer containing business entities and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions and storage error taxonomy
//!
//! The domain layer has no dependencies on the HTTP layer. Repository traits
//! are implemented by [`crate::infrastructure::persistence`] and consumed by
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
