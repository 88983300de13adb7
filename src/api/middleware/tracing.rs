//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// **On Request:**
/// - Creates a span at `INFO` level with:
///   - HTTP method
///   - URI path
///   - HTTP version
/// - Emits a `DEBUG` event
///
/// Short codes appear in the URI, so every redirect is traceable.
///
/// **On Response:**
/// - Logs at `INFO` level with:
///   - Status code
///   - Latency in milliseconds
///
/// **On Failure:** `5xx` responses are also logged at `ERROR` level.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/aB3x version=HTTP/1.1}: started processing request
/// INFO request{method=GET uri=/aB3x version=HTTP/1.1}: finished processing request latency=3 ms status=302
/// ```
///
/// # Integration
///
/// ```rust,ignore
/// let app = api::routes::routes()
///     .with_state(state)
///     .layer(tracing::layer());
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
