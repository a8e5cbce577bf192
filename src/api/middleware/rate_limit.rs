//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Per-client-IP rate limiter.
///
/// Each client may send `burst_size` requests at once, refilled at
/// `per_second` requests per second. Requests exceeding the limit receive
/// `429 Too Many Requests`.
///
/// The client key is the socket peer address, so the router must be served
/// with `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// Returns `None` if either limit is zero.
pub fn layer(
    per_second: u64,
    burst_size: u32,
) -> Option<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(per_second)
        .burst_size(burst_size)
        .finish()?;

    Some(GovernorLayer::new(Arc::new(governor_conf)))
}
