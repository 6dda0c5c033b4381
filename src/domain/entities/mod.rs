//! Core domain entities representing the business data model.
//!
//! The service has a single entity, [`Url`], mapping a short identifier to a
//! destination. Entities are plain data structures without business logic.

pub mod url;

pub use url::Url;
