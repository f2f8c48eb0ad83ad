//! Item enrichment applied after parsing.
//!
//! Splits trailing prices off item names, buckets them against the regional
//! price thresholds, infers dish and beverage types from keyword tables and
//! flags culturally typical items. Categories are never changed here.

use crate::models::menu::{BeverageType, Category, DishType, MenuItem, PriceRange};
use crate::services::classifier::tokenize;
use crate::services::regional::RegionalProfile;

/// Currency markers recognized in front of a trailing price. Longest first.
pub const CURRENCY_MARKERS: &[&str] = &["US$", "R$", "$", "€", "£"];

/// Characters allowed between an item name and its price, e.g. "Feijoada ..... R$ 60".
const NAME_PRICE_SEPARATORS: &[char] = &['.', '-', '–', '|', ':', '…', ' '];

// ── Dish type vocabulary ────────────────────────────────────────────────

pub const SEAFOOD_TERMS: &[&str] = &[
    "frutos do mar", "seafood", "peixe", "peixes", "fish", "camarão", "camarões", "camarao",
    "shrimp", "prawn", "prawns", "salmão", "salmao", "salmon", "atum", "tuna", "bacalhau", "cod",
    "lula", "lulas", "squid", "calamari", "polvo", "octopus", "lagosta", "lobster", "caranguejo",
    "crab", "siri", "mexilhão", "mexilhões", "mussels", "ostra", "ostras", "oyster", "oysters",
    "moqueca", "tilápia", "tilapia", "pescada", "robalo", "sushi", "sashimi", "ceviche",
];

pub const LAND_TERMS: &[&str] = &[
    "carne", "beef", "picanha", "filé", "file", "steak", "frango", "chicken", "porco", "pork",
    "linguiça", "linguica", "sausage", "bacon", "costela", "ribs", "cordeiro", "lamb", "feijoada",
    "churrasco", "virado", "hambúrguer", "hamburguer", "burger", "cupim", "maminha", "alcatra",
    "mortadela", "presunto", "ham", "carreteiro", "tropeiro", "galinhada", "pato", "duck",
    "cabrito", "lombo",
];

pub const VEGETARIAN_TERMS: &[&str] = &[
    "vegetariano", "vegetariana", "vegetarian", "vegano", "vegana", "vegan", "salada", "salad",
    "legumes", "vegetables", "cogumelo", "cogumelos", "mushroom", "mushrooms", "tofu",
    "grão-de-bico", "falafel", "caprese", "ratatouille", "palmito",
];

// ── Beverage type vocabulary ────────────────────────────────────────────

const NON_ALCOHOLIC_MARKERS: &[&str] = &[
    "sem álcool", "sem alcool", "non-alcoholic", "alcohol-free", "zero álcool", "mocktail",
];

const SPARKLING_TERMS: &[&str] = &["espumante", "champagne", "prosecco", "cava", "sparkling", "brut"];

const RED_WINE_TERMS: &[&str] = &[
    "vinho tinto", "tinto", "red wine", "malbec", "cabernet", "merlot", "pinot noir", "tannat",
    "syrah", "carménère", "carmenere",
];

const WHITE_WINE_TERMS: &[&str] = &[
    "vinho branco", "branco", "white wine", "chardonnay", "sauvignon blanc", "riesling", "moscato",
    "vinho verde",
];

const BEER_TERMS: &[&str] = &[
    "cerveja", "beer", "chopp", "chope", "ipa", "lager", "pilsen", "stout", "ale", "weiss",
];

const HOUSE_SPECIAL_TERMS: &[&str] = &["da casa", "house special", "especial da casa", "signature"];

const JUICE_TERMS: &[&str] = &["suco", "sucos", "juice", "néctar", "nectar"];

const FRESH_MARKERS: &[&str] = &["natural", "fresh", "espremido", "da fruta"];

const ALCOHOLIC_DRINK_TERMS: &[&str] = &[
    "caipirinha", "caipiroska", "cachaça", "cachaca", "batida", "drink", "drinks", "cocktail",
    "coquetel", "whisky", "whiskey", "vodka", "gin", "rum", "tequila", "licor", "sangria",
    "negroni", "mojito", "margarita", "aperol", "spritz",
];

const SOFT_DRINK_TERMS: &[&str] = &[
    "refrigerante", "soda", "água", "agua", "water", "limonada", "lemonade", "café", "cafe",
    "coffee", "cappuccino", "espresso", "chá", "cha", "tea", "mate", "chimarrão", "chimarrao",
    "guaraná", "guarana", "tônica", "tonica",
];

/// A price found at the end of a menu line.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTag {
    /// The line with the price (and any dotted leader) removed.
    pub name: String,
    /// Price as it should be displayed, e.g. "R$ 82".
    pub display: String,
    /// Numeric amount, used only for price bucketing.
    pub amount: f64,
}

/// Split a trailing price off a menu line.
///
/// Accepts a currency-marked amount ("R$ 82", "$12.50", "€ 9,90") or an
/// unmarked amount with two decimals ("82,00"). Returns `None` when the line
/// has no recognizable price or consists of the price alone.
pub fn split_price(line: &str) -> Option<PriceTag> {
    let trimmed = line.trim_end();

    // Walk back over the last number only: digits and separators, never spaces.
    let mut tail_start = trimmed.len();
    for (idx, ch) in trimmed.char_indices().rev() {
        if ch.is_ascii_digit() || ch == '.' || ch == ',' {
            tail_start = idx;
        } else {
            break;
        }
    }

    // The tail may start with leader dots or spaces; the amount starts at the first digit.
    let first_digit = tail_start + trimmed[tail_start..].find(|c: char| c.is_ascii_digit())?;
    let number = trimmed[first_digit..].trim_end();

    let prefix = trimmed[..first_digit].trim_end();
    let (prefix, display) = match CURRENCY_MARKERS.iter().find(|m| prefix.ends_with(*m)) {
        Some(marker) => (
            &prefix[..prefix.len() - marker.len()],
            format!("{} {}", marker, number),
        ),
        None if has_cents(number) => (prefix, number.to_string()),
        None => return None,
    };

    let amount = parse_amount(number)?;
    let name = prefix.trim_end_matches(NAME_PRICE_SEPARATORS).trim();
    if name.is_empty() {
        return None;
    }

    Some(PriceTag {
        name: name.to_string(),
        display,
        amount,
    })
}

/// Whether an unmarked number ends in a two-digit decimal part ("82,00", "12.50").
fn has_cents(number: &str) -> bool {
    let bytes = number.as_bytes();
    bytes.len() >= 4
        && matches!(bytes[bytes.len() - 3], b'.' | b',')
        && bytes[bytes.len() - 2..].iter().all(u8::is_ascii_digit)
}

/// Parse a display amount with either decimal convention ("1.250,00", "1,250.00", "82").
pub fn parse_amount(number: &str) -> Option<f64> {
    let compact: String = number.chars().filter(|c| !c.is_whitespace()).collect();

    let decimal_pos = match (compact.rfind(','), compact.rfind('.')) {
        (Some(c), Some(d)) => Some(c.max(d)),
        (Some(p), None) | (None, Some(p)) => {
            // A lone separator is decimal only when followed by one or two digits.
            let digits_after = compact.len() - p - 1;
            (1..=2).contains(&digits_after).then_some(p)
        }
        (None, None) => None,
    };

    let normalized: String = compact
        .char_indices()
        .filter_map(|(idx, ch)| match ch {
            '0'..='9' => Some(ch),
            '.' | ',' if Some(idx) == decimal_pos => Some('.'),
            _ => None,
        })
        .collect();

    normalized.parse().ok()
}

/// Bucket a price against the profile's scaled thresholds.
pub fn price_range(amount: f64, profile: &RegionalProfile) -> PriceRange {
    let (low_ceiling, high_floor) = profile.price_thresholds();
    if amount <= low_ceiling {
        PriceRange::Low
    } else if amount > high_floor {
        PriceRange::High
    } else {
        PriceRange::Medium
    }
}

/// Lowercased words of `text`, space-padded so whole-word phrases can be found with `contains`.
fn padded_words(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut padded = String::with_capacity(lower.len() + 2);
    padded.push(' ');
    for token in tokenize(&lower) {
        padded.push_str(token);
        padded.push(' ');
    }
    padded
}

fn mentions_any(padded: &str, terms: &[&str]) -> bool {
    terms
        .iter()
        .any(|term| padded.contains(&format!(" {} ", term)))
}

/// Infer seafood / land / vegetarian from the dish's name and description.
pub fn infer_dish_type(text: &str) -> Option<DishType> {
    let padded = padded_words(text);

    if mentions_any(&padded, SEAFOOD_TERMS) {
        Some(DishType::Seafood)
    } else if mentions_any(&padded, LAND_TERMS) {
        Some(DishType::Land)
    } else if mentions_any(&padded, VEGETARIAN_TERMS) {
        Some(DishType::Vegetarian)
    } else {
        None
    }
}

/// Infer the kind of drink from its name.
pub fn infer_beverage_type(text: &str) -> Option<BeverageType> {
    let padded = padded_words(text);

    if mentions_any(&padded, NON_ALCOHOLIC_MARKERS) {
        return Some(BeverageType::NonAlcoholicDrink);
    }
    if mentions_any(&padded, SPARKLING_TERMS) {
        return Some(BeverageType::Sparkling);
    }
    if mentions_any(&padded, RED_WINE_TERMS) {
        return Some(BeverageType::RedWine);
    }
    if mentions_any(&padded, WHITE_WINE_TERMS) {
        return Some(BeverageType::WhiteWine);
    }
    if mentions_any(&padded, BEER_TERMS) {
        return Some(BeverageType::Beer);
    }
    if mentions_any(&padded, HOUSE_SPECIAL_TERMS) {
        return Some(BeverageType::HouseSpecial);
    }
    if mentions_any(&padded, JUICE_TERMS) {
        return Some(if mentions_any(&padded, FRESH_MARKERS) {
            BeverageType::NaturalJuice
        } else {
            BeverageType::IndustrialJuice
        });
    }
    if mentions_any(&padded, ALCOHOLIC_DRINK_TERMS) {
        return Some(BeverageType::AlcoholicDrink);
    }
    if mentions_any(&padded, SOFT_DRINK_TERMS) {
        return Some(BeverageType::NonAlcoholicDrink);
    }

    None
}

/// Fill in price, price range, dish/beverage type and regional flags.
///
/// Fields that are already set are kept as they are.
pub fn enrich(mut item: MenuItem, profile: &RegionalProfile) -> MenuItem {
    if item.price.is_none() {
        if let Some(tag) = split_price(&item.name) {
            item.name = tag.name;
            item.price = Some(tag.display);
            if item.price_range.is_none() {
                item.price_range = Some(price_range(tag.amount, profile));
            }
        }
    }

    let text = match &item.description {
        Some(description) => format!("{} {}", item.name, description),
        None => item.name.clone(),
    };

    match item.category {
        Category::Entree | Category::Main => {
            if item.dish_type.is_none() {
                item.dish_type = infer_dish_type(&text);
            }
        }
        Category::Beverage => {
            if item.beverage_type.is_none() {
                item.beverage_type = infer_beverage_type(&text);
            }
        }
        Category::Dessert => {}
    }

    if profile.is_typical(&item.name) {
        item.is_regional = true;
        if item.cultural_info.is_none() && !profile.cultural_info.is_empty() {
            item.cultural_info = Some(profile.cultural_info.to_string());
        }
    }

    item
}

/// Enrich every parsed item, keeping menu order.
pub fn enrich_all(items: Vec<MenuItem>, profile: &RegionalProfile) -> Vec<MenuItem> {
    items.into_iter().map(|item| enrich(item, profile)).collect()
}
