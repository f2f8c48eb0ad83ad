use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::models::menu::MenuItem;

/// Lowest and highest compatibility score an item can receive.
pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

/// How daring the recommended combination is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AdventureLevel {
    Conservative,
    #[default]
    Balanced,
    Adventurous,
}

/// A drink offered as a contrast to the selected beverage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeverageSuggestion {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price: Option<String>,
    pub description: String,
}

/// A menu item with its compatibility score and category-specific extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredMenuItem {
    #[serde(flatten)]
    pub item: MenuItem,

    /// Always within `MIN_SCORE..=MAX_SCORE`.
    pub compatibility_score: u8,

    /// True when the category had no item on the menu and this entry stands in for it.
    #[serde(default)]
    pub is_placeholder: bool,

    // Entrees
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub preparation_time: Option<String>,

    // Mains
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ingredients: Option<Vec<String>>,

    // Beverages
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub adventure_alternative: Option<BeverageSuggestion>,
}

impl ScoredMenuItem {
    pub fn new(item: MenuItem, compatibility_score: u8) -> Self {
        Self {
            item,
            compatibility_score: compatibility_score.clamp(MIN_SCORE, MAX_SCORE),
            is_placeholder: false,
            preparation_time: None,
            ingredients: None,
            adventure_alternative: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }
}

/// One pick per course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Harmonization {
    pub entree: ScoredMenuItem,
    pub main: ScoredMenuItem,
    pub beverage: ScoredMenuItem,
}

impl Harmonization {
    pub fn iter(&self) -> impl Iterator<Item = &ScoredMenuItem> {
        [&self.entree, &self.main, &self.beverage].into_iter()
    }
}

/// A contrasting combination built from the next item of each course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdventureAlternative {
    pub entree: ScoredMenuItem,
    pub main: ScoredMenuItem,
    pub beverage: ScoredMenuItem,
    pub reason: String,
}

/// Final recommendation handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarmonizationRecommendation {
    pub entree: ScoredMenuItem,
    pub main: ScoredMenuItem,
    pub beverage: ScoredMenuItem,
    pub overall_score: u8,
    pub justification: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub adventure_alternative: Option<AdventureAlternative>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sommelier_tip: Option<String>,
    pub total_experience_time: String,
    pub adventure_level: AdventureLevel,
}

impl HarmonizationRecommendation {
    pub fn iter_courses(&self) -> impl Iterator<Item = &ScoredMenuItem> {
        [&self.entree, &self.main, &self.beverage].into_iter()
    }

    /// Whether any course is a stand-in because the menu lacked it.
    pub fn has_placeholder(&self) -> bool {
        self.iter_courses().any(|course| course.is_placeholder)
    }
}
