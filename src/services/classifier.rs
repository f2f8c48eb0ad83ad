//! Line classifier for recognized menu text.
//!
//! Maps a single line to a menu category with case-insensitive keyword
//! matching. Vocabularies cover Portuguese and English menus.

use crate::models::menu::Category;

// ── Beverages ───────────────────────────────────────────────────────────

/// Words that mark a line as a drink.
pub const BEVERAGE_KEYWORDS: &[&str] = &[
    // Wine
    "vinho", "vinhos", "wine", "wines", "espumante", "champagne", "prosecco", "cava", "tinto",
    "sangria",
    // Beer
    "cerveja", "cervejas", "beer", "beers", "chopp", "chope", "ipa", "lager", "pilsen", "stout",
    // Spirits & cocktails
    "caipirinha", "caipiroska", "cachaça", "cachaca", "batida", "drink", "drinks", "cocktail",
    "coquetel", "whisky", "whiskey", "vodka", "gin", "rum", "tequila", "licor",
    // Soft drinks, juices, hot drinks
    "suco", "sucos", "juice", "refrigerante", "soda", "água", "agua", "water", "limonada",
    "lemonade", "café", "cafe", "coffee", "cappuccino", "espresso", "chá", "cha", "tea", "mate",
    "chimarrão", "chimarrao", "bebida", "bebidas",
];

// ── Desserts ────────────────────────────────────────────────────────────

/// Words that mark a line as a dessert.
pub const DESSERT_KEYWORDS: &[&str] = &[
    "sobremesa", "sobremesas", "dessert", "desserts", "bolo", "cake", "doce", "sweet", "pudim",
    "pudding", "sorvete", "gelato", "mousse", "brigadeiro", "brownie", "tiramisu", "cheesecake",
    "quindim", "cocada", "petit",
];

// ── Entrees ─────────────────────────────────────────────────────────────

/// Explicit starter markers.
pub const ENTREE_KEYWORDS: &[&str] = &[
    "entrada", "entradas", "starter", "starters", "appetizer", "appetizers", "petisco", "petiscos",
    "couvert", "antepasto", "tira-gosto",
];

/// Phrases checked as substrings because they span several words.
const ICE_CREAM_PHRASES: &[&str] = &["ice cream"];

/// Classify one trimmed line of menu text.
///
/// Total: every input yields a category. Lines without any keyword fall back
/// to [`Category::Main`], which is also how headers and page numbers end up.
pub fn classify(line: &str) -> Category {
    let lower = line.trim().to_lowercase();
    let tokens: Vec<&str> = tokenize(&lower).collect();

    if contains_any(&tokens, BEVERAGE_KEYWORDS) {
        return Category::Beverage;
    }

    if contains_any(&tokens, DESSERT_KEYWORDS)
        || ICE_CREAM_PHRASES.iter().any(|phrase| lower.contains(phrase))
    {
        return Category::Dessert;
    }

    if contains_any(&tokens, ENTREE_KEYWORDS) {
        return Category::Entree;
    }

    Category::Main
}

/// Split lowercased text into word tokens, keeping accented letters and hyphens.
pub(crate) fn tokenize(lower: &str) -> impl Iterator<Item = &str> {
    lower
        .split(|c: char| !(c.is_alphanumeric() || c == '-'))
        .filter(|token| !token.is_empty())
}

fn contains_any(tokens: &[&str], vocabulary: &[&str]) -> bool {
    tokens.iter().any(|token| vocabulary.contains(token))
}
