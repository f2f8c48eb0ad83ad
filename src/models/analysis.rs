use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::menu::MenuItem;
use crate::models::preference::{AllergySet, Preference};
use crate::models::recommendation::HarmonizationRecommendation;

/// Upper bound, in characters, on the recognized text accepted per request.
pub const MAX_MENU_TEXT_CHARS: usize = 20_000;

/// One completed menu analysis: what was read, what was asked, what was recommended.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuAnalysis {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub region: Option<String>,
    pub items: Vec<MenuItem>,
    pub preference: Preference,
    pub allergies: AllergySet,
    pub recommendation: HarmonizationRecommendation,

    /// Non-fatal issues the UI should surface (missing courses, allergy conflicts).
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<String>,
}

/// POST /api/v1/analyze body.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[garde(length(chars, min = 1, max = MAX_MENU_TEXT_CHARS))]
    pub text: String,

    #[garde(skip)]
    #[serde(default)]
    pub preference: Preference,

    #[garde(length(max = 16))]
    #[serde(default)]
    pub allergies: Vec<String>,

    #[garde(length(chars, max = 8))]
    #[serde(default)]
    pub region: Option<String>,
}

/// POST /api/v1/menu/parse body.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ParseRequest {
    #[garde(length(chars, min = 1, max = MAX_MENU_TEXT_CHARS))]
    pub text: String,

    #[garde(length(chars, max = 8))]
    #[serde(default)]
    pub region: Option<String>,
}

/// Response for a parse-only request.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResponse {
    pub items: Vec<MenuItem>,
    /// Whether the menu mixes enough dish types to be worth asking for a preference.
    pub ask_preference: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze_request(text: String, region: Option<&str>) -> AnalyzeRequest {
        AnalyzeRequest {
            text,
            preference: Preference::default(),
            allergies: Vec::new(),
            region: region.map(str::to_string),
        }
    }

    #[test]
    fn test_text_limit_counts_characters() {
        // Two bytes per character: within the limit in characters, over it in bytes.
        let accented = "é".repeat(MAX_MENU_TEXT_CHARS);
        assert!(analyze_request(accented, None).validate().is_ok());

        let too_long = "é".repeat(MAX_MENU_TEXT_CHARS + 1);
        assert!(analyze_request(too_long, None).validate().is_err());
    }

    #[test]
    fn test_empty_text_rejected() {
        assert!(analyze_request(String::new(), None).validate().is_err());
    }

    #[test]
    fn test_empty_region_accepted() {
        assert!(analyze_request("Feijoada".to_string(), Some("")).validate().is_ok());
        let parse = ParseRequest {
            text: "Feijoada".to_string(),
            region: Some(String::new()),
        };
        assert!(parse.validate().is_ok());
        assert!(analyze_request("Feijoada".to_string(), Some("TOOLONGCODE")).validate().is_err());
    }
}
