use std::str::FromStr;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use garde::Validate;

use crate::app_state::AppState;
use crate::models::analysis::{AnalyzeRequest, MenuAnalysis, ParseRequest, ParseResponse};
use crate::models::preference::{AllergySet, Preference};
use crate::services::{analysis, extraction, harmonization, parser, regional};

/// POST /api/v1/menu/parse: structured items without a recommendation.
pub async fn parse_menu(
    State(state): State<AppState>,
    Json(request): Json<ParseRequest>,
) -> Result<Json<ParseResponse>, StatusCode> {
    request.validate().map_err(|e| {
        tracing::warn!(error = %e, "Rejected parse request");
        StatusCode::BAD_REQUEST
    })?;

    let region = state.region_or_default(request.region.as_deref());
    count_unknown_region(region);
    let profile = regional::profile_or_default(region);

    let items = extraction::enrich_all(parser::parse(&request.text), profile);
    metrics::counter!("menu_items_parsed_total").increment(items.len() as u64);
    let ask_preference = harmonization::should_ask_preference(&items);

    Ok(Json(ParseResponse {
        items,
        ask_preference,
    }))
}

/// POST /api/v1/analyze: recommend a harmonization from menu text.
pub async fn analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<MenuAnalysis>, StatusCode> {
    request.validate().map_err(|e| {
        tracing::warn!(error = %e, "Rejected analyze request");
        StatusCode::BAD_REQUEST
    })?;

    let allergies = AllergySet::from_tags(&request.allergies);
    let analysis = run_analysis(
        &state,
        &request.text,
        request.preference,
        &allergies,
        request.region.as_deref(),
    )
    .await;

    Ok(Json(analysis))
}

/// POST /api/v1/analyze/image: recognize a menu photo, then analyze it.
///
/// Multipart fields: `image` (required), `preference`, `allergies`
/// (comma-separated) and `region`.
pub async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MenuAnalysis>, StatusCode> {
    let recognizer = state.ocr.clone().ok_or(StatusCode::SERVICE_UNAVAILABLE)?;

    let mut image_data: Option<Vec<u8>> = None;
    let mut preference = Preference::default();
    let mut allergies = AllergySet::new();
    let mut region: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|_| StatusCode::BAD_REQUEST)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("image") => {
                let data = field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?;

                // Validate image format using the `image` crate
                image::guess_format(&data).map_err(|_| StatusCode::UNSUPPORTED_MEDIA_TYPE)?;

                image_data = Some(data.to_vec());
            }
            Some("preference") => {
                let value = field.text().await.map_err(|_| StatusCode::BAD_REQUEST)?;
                let value = value.trim();
                if !value.is_empty() {
                    preference = Preference::from_str(value).map_err(|_| StatusCode::BAD_REQUEST)?;
                }
            }
            Some("allergies") => {
                let value = field.text().await.map_err(|_| StatusCode::BAD_REQUEST)?;
                allergies = AllergySet::from_tags(value.split(','));
            }
            Some("region") => {
                let value = field.text().await.map_err(|_| StatusCode::BAD_REQUEST)?;
                let value = value.trim();
                if !value.is_empty() {
                    region = Some(value.to_string());
                }
            }
            _ => {}
        }
    }

    let image_data = image_data.ok_or(StatusCode::BAD_REQUEST)?;

    metrics::counter!("ocr_requests_total").increment(1);
    let text = recognizer.recognize(&image_data).await.map_err(|e| {
        metrics::counter!("ocr_failures_total").increment(1);
        tracing::error!(error = %e, bytes = image_data.len(), "Text recognition failed");
        StatusCode::BAD_GATEWAY
    })?;

    let analysis = run_analysis(&state, &text, preference, &allergies, region.as_deref()).await;

    Ok(Json(analysis))
}

/// Analyze, record metrics and store the result in history.
async fn run_analysis(
    state: &AppState,
    text: &str,
    preference: Preference,
    allergies: &AllergySet,
    region: Option<&str>,
) -> MenuAnalysis {
    let start = std::time::Instant::now();
    let region = state.region_or_default(region);
    count_unknown_region(region);

    let analysis = analysis::analyze_menu(text, preference, allergies, region);

    let placeholders = analysis
        .recommendation
        .iter_courses()
        .filter(|course| course.is_placeholder)
        .count();

    metrics::counter!("menu_analyses_total").increment(1);
    metrics::counter!("menu_items_parsed_total").increment(analysis.items.len() as u64);
    metrics::counter!("placeholder_items_total").increment(placeholders as u64);
    metrics::histogram!("analysis_processing_seconds").record(start.elapsed().as_secs_f64());

    state.history.record(analysis.clone()).await;

    analysis
}

fn count_unknown_region(region: Option<&str>) {
    if let Some(code) = region {
        if regional::lookup(code).is_err() {
            metrics::counter!("unknown_region_total").increment(1);
        }
    }
}
