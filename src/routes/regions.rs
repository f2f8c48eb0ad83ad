use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use crate::services::regional::{self, RegionalProfile, DEFAULT_PROFILE};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionListResponse {
    pub regions: Vec<&'static str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionResponse {
    pub code: String,
    /// False when the code has no profile and the neutral defaults are returned.
    pub known: bool,
    pub profile: &'static RegionalProfile,
}

/// GET /api/v1/regions: codes with a regional profile.
pub async fn list_regions() -> Json<RegionListResponse> {
    Json(RegionListResponse {
        regions: regional::region_codes().collect(),
    })
}

/// GET /api/v1/regions/{code}: profile for one region.
///
/// Unknown codes are not an error: they get the default profile with `known = false`.
pub async fn get_region(Path(code): Path<String>) -> Json<RegionResponse> {
    let (known, profile) = match regional::lookup(&code) {
        Ok(profile) => (true, profile),
        Err(e) => {
            tracing::debug!(error = %e, "Region lookup fell back to defaults");
            metrics::counter!("unknown_region_total").increment(1);
            (false, &DEFAULT_PROFILE)
        }
    };

    Json(RegionResponse {
        code: code.trim().to_ascii_uppercase(),
        known,
        profile,
    })
}
