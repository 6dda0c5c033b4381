//! Utility functions shared across layers.
//!
//! - [`id_generator`] - Deterministic short identifier derivation

pub mod id_generator;
