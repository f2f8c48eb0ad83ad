pub mod analyze;
pub mod health;
pub mod history;
pub mod metrics;
pub mod regions;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Build the full HTTP router.
///
/// `/metrics` is only mounted when a Prometheus recorder was installed.
pub fn build_router(state: AppState, prometheus: Option<Arc<PrometheusHandle>>) -> Router {
    let body_limit = state.max_upload_bytes;

    let mut app = Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/regions", get(regions::list_regions))
        .route("/api/v1/regions/{code}", get(regions::get_region))
        .route("/api/v1/menu/parse", post(analyze::parse_menu))
        .route("/api/v1/analyze", post(analyze::analyze_text))
        .route("/api/v1/analyze/image", post(analyze::analyze_image))
        .route("/api/v1/history", get(history::list_history))
        .route("/api/v1/history/{id}", get(history::get_analysis))
        .with_state(state);

    if let Some(handle) = prometheus {
        app = app.route(
            "/metrics",
            get(metrics::prometheus_metrics).with_state(handle),
        );
    }

    app.layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
}
