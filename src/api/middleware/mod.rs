//! HTTP middleware for request processing and protection.
//!
//! Provides rate limiting and request logging.

pub mod rate_limit;
pub mod tracing;
