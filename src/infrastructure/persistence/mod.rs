//! Repository implementations.
//!
//! - [`InMemoryUrlRepository`] - Process-local storage, used when no database is configured
//! - [`PgUrlRepository`] - PostgreSQL storage via SQLx

pub mod memory_url_repository;
pub mod pg_url_repository;

pub use memory_url_repository::InMemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;
