//! Regional adjustment reference data.
//!
//! Culturally typical dishes and drinks per Brazilian state, with the price
//! multiplier used to scale price buckets. The table is compiled in and
//! read-only.

use serde::Serialize;
use strsim::jaro_winkler;

use crate::services::classifier::tokenize;

/// Minimum similarity for a name word to count as a word of a typical regional entry.
const REGIONAL_MATCH_THRESHOLD: f64 = 0.92;

/// Connectives that carry no meaning when matching dish names.
const CONNECTIVES: &[&str] = &["de", "da", "do", "das", "dos", "à", "a", "ao", "e", "com", "na", "no"];

/// Price (in display currency units) at or below which an item is low-priced, before scaling.
pub const BASE_LOW_PRICE_CEILING: f64 = 25.0;

/// Price above which an item is high-priced, before scaling.
pub const BASE_HIGH_PRICE_FLOOR: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalProfile {
    pub typical_drinks: &'static [&'static str],
    pub typical_dishes: &'static [&'static str],
    pub cultural_info: &'static str,
    pub price_multiplier: f64,
}

/// Profile used when no region applies: no typical items, neutral prices.
pub static DEFAULT_PROFILE: RegionalProfile = RegionalProfile {
    typical_drinks: &[],
    typical_dishes: &[],
    cultural_info: "",
    price_multiplier: 1.0,
};

// ── Region table ────────────────────────────────────────────────────────

pub const REGIONAL_PROFILES: &[(&str, RegionalProfile)] = &[
    (
        "SP",
        RegionalProfile {
            typical_drinks: &["Cerveja Brahma", "Caipirinha", "Vinho Aurora", "Suco de Caju"],
            typical_dishes: &["Virado à Paulista", "Sanduíche de Mortadela", "Pastel de Feira"],
            cultural_info: "São Paulo is known for its gastronomic diversity and strong Italian influence.",
            price_multiplier: 1.2,
        },
    ),
    (
        "RJ",
        RegionalProfile {
            typical_drinks: &["Cerveja Bohemia", "Caipirinha", "Água de Coco", "Mate Gelado"],
            typical_dishes: &["Feijoada", "Pão de Açúcar", "Biscoito Globo"],
            cultural_info: "Rio de Janeiro blends carioca tradition with international influences.",
            price_multiplier: 1.15,
        },
    ),
    (
        "MG",
        RegionalProfile {
            typical_drinks: &["Cachaça Artesanal", "Café Especial", "Suco de Goiaba"],
            typical_dishes: &["Pão de Queijo", "Feijão Tropeiro", "Doce de Leite"],
            cultural_info: "Minas Gerais is famous for traditional home cooking and hospitality.",
            price_multiplier: 0.9,
        },
    ),
    (
        "RS",
        RegionalProfile {
            typical_drinks: &["Cerveja Polar", "Vinho Miolo", "Chimarrão"],
            typical_dishes: &["Churrasco", "Arroz Carreteiro", "Cucuca"],
            cultural_info: "Rio Grande do Sul has a strong gaucho and winemaking tradition.",
            price_multiplier: 1.0,
        },
    ),
    (
        "PE",
        RegionalProfile {
            typical_drinks: &["Cerveja Devassa", "Batida de Coco", "Cachaça Pitú"],
            typical_dishes: &["Tapioca", "Acarajé", "Bolo de Rolo"],
            cultural_info: "Pernambuco offers the distinctive flavours of the Brazilian Northeast.",
            price_multiplier: 0.8,
        },
    ),
];

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RegionalError {
    #[error("Unknown region code: {0}")]
    UnknownRegion(String),
}

/// Look up the profile for a region code (case-insensitive).
pub fn lookup(region_code: &str) -> Result<&'static RegionalProfile, RegionalError> {
    let code = region_code.trim();
    REGIONAL_PROFILES
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(code))
        .map(|(_, profile)| profile)
        .ok_or_else(|| RegionalError::UnknownRegion(code.to_string()))
}

/// Resolve a region to its profile, falling back to [`DEFAULT_PROFILE`].
///
/// Unknown or missing codes never fail; they simply mean no regional adjustment.
pub fn profile_or_default(region_code: Option<&str>) -> &'static RegionalProfile {
    match region_code.map(lookup) {
        Some(Ok(profile)) => profile,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "No regional profile, using defaults");
            &DEFAULT_PROFILE
        }
        None => &DEFAULT_PROFILE,
    }
}

fn distinguishing_words(lower: &str) -> impl Iterator<Item = &str> {
    tokenize(lower).filter(|word| !CONNECTIVES.contains(word))
}

/// All region codes in the table.
pub fn region_codes() -> impl Iterator<Item = &'static str> {
    REGIONAL_PROFILES.iter().map(|(code, _)| *code)
}

impl RegionalProfile {
    /// Price bucket boundaries `(low_ceiling, high_floor)` scaled by the multiplier.
    pub fn price_thresholds(&self) -> (f64, f64) {
        (
            BASE_LOW_PRICE_CEILING * self.price_multiplier,
            BASE_HIGH_PRICE_FLOOR * self.price_multiplier,
        )
    }

    /// Whether a menu item name refers to one of this region's typical dishes or drinks.
    ///
    /// Every distinguishing word of the typical entry must appear in the name,
    /// tolerating small recognition typos per word. Connectives such as "de"
    /// are ignored, so "Suco de Uva" does not match "Suco de Caju".
    pub fn is_typical(&self, item_name: &str) -> bool {
        let name = item_name.trim().to_lowercase();
        let name_words: Vec<&str> = distinguishing_words(&name).collect();
        if name_words.is_empty() {
            return false;
        }

        self.typical_dishes
            .iter()
            .chain(self.typical_drinks.iter())
            .any(|typical| {
                let typical = typical.to_lowercase();
                let mut wanted = distinguishing_words(&typical).peekable();
                wanted.peek().is_some()
                    && wanted.all(|word| {
                        name_words.iter().any(|candidate| {
                            *candidate == word
                                || jaro_winkler(candidate, word) >= REGIONAL_MATCH_THRESHOLD
                        })
                    })
            })
    }

    /// Whether this is the neutral fallback profile.
    pub fn is_default(&self) -> bool {
        self == &DEFAULT_PROFILE
    }
}
