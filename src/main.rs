use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use menu_harmonizer::app_state::AppState;
use menu_harmonizer::build_router;
use menu_harmonizer::config::AppConfig;
use menu_harmonizer::routes::metrics::describe_metrics;
use menu_harmonizer::services::ocr::{TextRecognizer, VisionClient};

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing menu-harmonizer server");

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    let prometheus_handle = Arc::new(prometheus_handle);

    describe_metrics();

    // Text recognition is optional; text endpoints work without it
    let ocr: Option<Arc<dyn TextRecognizer>> = match config.google_vision_api_key.as_deref() {
        Some(key) if !key.trim().is_empty() => {
            tracing::info!("Initializing Google Vision client");
            let client = VisionClient::new(key).expect("Failed to initialize Vision client");
            Some(Arc::new(client))
        }
        _ => {
            tracing::warn!("GOOGLE_VISION_API_KEY not set, image analysis disabled");
            None
        }
    };

    if let Some(region) = config.default_region.as_deref() {
        tracing::info!(region = %region, "Using default region");
    }

    let state = AppState::new(&config, ocr);
    let app = build_router(state, Some(prometheus_handle));

    tracing::info!("Starting menu-harmonizer on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
