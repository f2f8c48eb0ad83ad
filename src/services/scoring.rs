//! Compatibility scoring of a single menu item.
//!
//! Additive point scheme starting from a neutral base, clamped to 1..=10 so
//! that even a severe allergy conflict still yields a (low) valid score.

use crate::models::menu::{BeverageType, Category, DishType, MenuItem, PriceRange};
use crate::models::preference::{Allergy, AllergySet, Preference};
use crate::models::recommendation::{MAX_SCORE, MIN_SCORE};

const BASE_SCORE: i32 = 5;
const PREFERENCE_MATCH_BONUS: i32 = 3;
const BALANCED_BONUS: i32 = 1;
const REGIONAL_BONUS: i32 = 1;
const MEDIUM_PRICE_BONUS: i32 = 1;
const BEVERAGE_PAIRING_BONUS: i32 = 2;
const ALLERGY_PENALTY: i32 = 5;

// ── Allergen name tokens ────────────────────────────────────────────────

pub const SHELLFISH_TOKENS: &[&str] = &[
    "camarão", "camarao", "camarões", "shrimp", "prawn", "lagosta", "lobster", "caranguejo",
    "crab", "siri", "lagostim",
];

pub const CHEESE_TOKENS: &[&str] = &[
    "queijo", "cheese", "parmesão", "parmesao", "parmesan", "mussarela", "muçarela", "mozzarella",
    "gorgonzola", "catupiry", "requeijão",
];

pub const BREAD_TOKENS: &[&str] = &["pão", "pao", "bread", "torrada", "toast", "brioche", "baguete"];

/// Beverages that pair with a seafood meal.
const SEAFOOD_PAIRINGS: &[BeverageType] = &[
    BeverageType::WhiteWine,
    BeverageType::Sparkling,
    BeverageType::Beer,
];

/// Beverages that pair with a land (meat) meal.
const LAND_PAIRINGS: &[BeverageType] = &[BeverageType::RedWine, BeverageType::Beer];

/// Score how well `item`, served as `category`, suits the diner.
///
/// - base 5
/// - +3 when the dish type matches the preference; +1 flat for `balanced`
/// - +1 regional, +1 medium price range
/// - +2 beverage pairing (seafood: white/sparkling/beer, land: red/beer)
/// - -5 per triggered allergy rule (shellfish, fish, dairy, gluten)
pub fn score(
    item: &MenuItem,
    category: Category,
    preference: Preference,
    allergies: &AllergySet,
) -> u8 {
    let mut points = BASE_SCORE;

    if item.dish_type.is_some() && item.dish_type == preference.dish_type() {
        points += PREFERENCE_MATCH_BONUS;
    }
    if preference == Preference::Balanced {
        points += BALANCED_BONUS;
    }

    if item.is_regional {
        points += REGIONAL_BONUS;
    }

    if item.price_range == Some(PriceRange::Medium) {
        points += MEDIUM_PRICE_BONUS;
    }

    if category == Category::Beverage && pairs_with(item.beverage_type, preference) {
        points += BEVERAGE_PAIRING_BONUS;
    }

    points -= ALLERGY_PENALTY * triggered_allergies(item, allergies).len() as i32;

    points.clamp(MIN_SCORE as i32, MAX_SCORE as i32) as u8
}

fn pairs_with(beverage_type: Option<BeverageType>, preference: Preference) -> bool {
    let Some(beverage_type) = beverage_type else {
        return false;
    };
    match preference {
        Preference::Seafood => SEAFOOD_PAIRINGS.contains(&beverage_type),
        Preference::Land => LAND_PAIRINGS.contains(&beverage_type),
        Preference::Vegetarian | Preference::Balanced => false,
    }
}

/// Allergy rules the item trips, each counted once.
///
/// Nuts, eggs and soy are accepted as tags but have no rule yet.
pub fn triggered_allergies(item: &MenuItem, allergies: &AllergySet) -> Vec<Allergy> {
    let name = item.name.to_lowercase();
    let mut triggered = Vec::new();

    if allergies.contains(Allergy::Shellfish) && contains_token(&name, SHELLFISH_TOKENS) {
        triggered.push(Allergy::Shellfish);
    }
    if allergies.contains(Allergy::Fish) && item.dish_type == Some(DishType::Seafood) {
        triggered.push(Allergy::Fish);
    }
    if allergies.contains(Allergy::Dairy) && contains_token(&name, CHEESE_TOKENS) {
        triggered.push(Allergy::Dairy);
    }
    if allergies.contains(Allergy::Gluten) && contains_token(&name, BREAD_TOKENS) {
        triggered.push(Allergy::Gluten);
    }

    triggered
}

fn contains_token(name: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|token| name.contains(token))
}
