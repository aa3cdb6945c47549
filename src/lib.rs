//! In-memory articles with type-checked fields, publication ordering and
//! content analysis.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
