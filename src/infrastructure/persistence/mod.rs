//! Short link repository implementations.
//!
//! # Repositories
//!
//! - [`PgShortLinkRepository`] - PostgreSQL storage (production)
//! - [`InMemoryShortLinkRepository`] - hash-map storage (tests)

pub mod memory_short_link_repository;
pub mod pg_short_link_repository;

pub use memory_short_link_repository::InMemoryShortLinkRepository;
pub use pg_short_link_repository::PgShortLinkRepository;
