use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    pub ocr: ComponentHealth,
    pub history: ComponentHealth,
}

#[derive(Serialize)]
pub struct ComponentHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// GET /health: service status and collaborator availability.
///
/// Missing text recognition only degrades the image endpoint, so the service
/// still reports `ok` without it.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let ocr = match state.ocr {
        Some(_) => ComponentHealth {
            status: "ok".to_string(),
            detail: None,
        },
        None => ComponentHealth {
            status: "disabled".to_string(),
            detail: Some("GOOGLE_VISION_API_KEY not set".to_string()),
        },
    };

    let history = ComponentHealth {
        status: "ok".to_string(),
        detail: Some(format!(
            "{}/{} analyses",
            state.history.len().await,
            state.history.limit()
        )),
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { ocr, history },
    })
}
