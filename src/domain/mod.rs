//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Storage backends in [`crate::infrastructure::persistence`]
//! implement the traits defined here.

pub mod entities;
pub mod repositories;
