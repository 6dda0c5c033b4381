//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates a per-client-IP rate limiter.
///
/// # Arguments
///
/// - `replenish_seconds` - interval after which one request of quota is restored
/// - `burst` - requests a client may make before being limited
///
/// Requests exceeding the limit receive `429 Too Many Requests`. The client
/// IP is the socket peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Panics
///
/// Panics if either argument is zero; [`crate::config::Config::validate`]
/// rejects such values at startup.
pub fn layer(
    replenish_seconds: u64,
    burst: u32,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(replenish_seconds)
            .burst_size(burst)
            .finish()
            .expect("rate limit settings must be non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
