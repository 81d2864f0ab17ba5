//! Core domain entities.
//!
//! Entities are plain data structures without business logic. Creation input
//! is modelled separately (`NewShortLink`) from the persisted record
//! (`ShortLink`), which carries the server-assigned id.

pub mod short_link;

pub use short_link::{NewShortLink, ShortLink};
