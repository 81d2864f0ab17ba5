//! Utility functions shared across layers.
//!
//! - [`validation`] - URL and alias validation rules
//! - [`alias_generator`] - Random alias generation
//! - [`db_error`] - PostgreSQL constraint-violation classification

pub mod alias_generator;
pub mod db_error;
pub mod validation;
