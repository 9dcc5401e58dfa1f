//! Router for the shipping-logistics proxy endpoints

use axum::Router;
use std::sync::Arc;
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use rajaongkir_proxy::ShippingService;

/// Create the router for all proxy endpoints
///
/// The endpoints will be available at:
/// - /shipping-cost/?origin=..&destination=..&weight=..&courier=..
/// - /provinces/
/// - /cities/ and /cities/{province_id}
/// - /subdistricts/{city_id}
///
/// Every request is traced at INFO level with latency in milliseconds.
pub fn proxy_router(service: Arc<ShippingService>) -> Router {
    proxy_router_no_trace(service).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as `proxy_router()` but without the HTTP tracing middleware.
pub fn proxy_router_no_trace(service: Arc<ShippingService>) -> Router {
    super::shipping::router().with_state(service)
}
