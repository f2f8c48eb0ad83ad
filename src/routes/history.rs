use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::models::analysis::MenuAnalysis;

/// GET /api/v1/history: recent analyses, most recent first.
pub async fn list_history(State(state): State<AppState>) -> Json<Vec<MenuAnalysis>> {
    Json(state.history.list().await)
}

/// GET /api/v1/history/{id}: one stored analysis.
pub async fn get_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MenuAnalysis>, StatusCode> {
    state
        .history
        .get(id)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
