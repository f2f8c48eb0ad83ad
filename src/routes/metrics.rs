use axum::extract::State;
use axum::response::IntoResponse;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Prometheus metrics scrape endpoint.
/// Returns metrics in Prometheus text exposition format.
pub async fn prometheus_metrics(State(handle): State<Arc<PrometheusHandle>>) -> impl IntoResponse {
    handle.render()
}

/// Register descriptions for every metric the service emits.
pub fn describe_metrics() {
    metrics::describe_counter!("menu_analyses_total", "Total menu analyses completed");
    metrics::describe_counter!(
        "menu_items_parsed_total",
        "Total menu items parsed from recognized text"
    );
    metrics::describe_counter!(
        "placeholder_items_total",
        "Courses missing from a menu and filled with a placeholder"
    );
    metrics::describe_counter!("ocr_requests_total", "Total text recognition requests");
    metrics::describe_counter!("ocr_failures_total", "Text recognition requests that failed");
    metrics::describe_counter!(
        "unknown_region_total",
        "Requests naming a region code with no regional profile"
    );
    metrics::describe_histogram!(
        "analysis_processing_seconds",
        "Time to analyze a menu, text recognition excluded"
    );
}
