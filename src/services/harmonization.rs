//! Harmonization selection: one item per course.
//!
//! Policy is first-in-category: the first entree, main and beverage in menu
//! reading order are picked, whatever their scores. Menu order reflects the
//! venue's own emphasis and keeps results deterministic. A course missing
//! from the menu gets a placeholder with the minimum score.

use std::collections::HashSet;

use crate::models::menu::{Category, MenuItem};
use crate::models::preference::{AllergySet, Preference};
use crate::models::recommendation::{
    AdventureAlternative, BeverageSuggestion, Harmonization, ScoredMenuItem, MIN_SCORE,
};
use crate::services::regional::RegionalProfile;
use crate::services::scoring;

pub const ENTREE_PREPARATION_TIME: &str = "15 min";
const NOT_AVAILABLE: &str = "N/A";

const HOUSE_BEVERAGE_SUGGESTION: &str = "Caipirinha Premium";
const HOUSE_BEVERAGE_SUGGESTION_PRICE: &str = "R$ 25";

const GENERIC_INGREDIENTS: &[&str] = &["Main course ingredients", "House seasoning", "Side dishes"];

/// Selection output: the primary picks and, when the menu allows, a contrasting triple.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub primary: Harmonization,
    pub adventure: Option<AdventureAlternative>,
}

/// Pick one item per course using the default (regionless) beverage suggestion.
pub fn select(items: &[MenuItem], preference: Preference, allergies: &AllergySet) -> Selection {
    select_with_region(items, preference, allergies, None)
}

/// Pick one item per course. Never fails: empty courses become placeholders.
///
/// When any course offers a second distinct item an adventure triple is
/// composed from the next item of each course, falling back to the primary
/// pick where a course has nothing else.
pub fn select_with_region(
    items: &[MenuItem],
    preference: Preference,
    allergies: &AllergySet,
    profile: Option<&RegionalProfile>,
) -> Selection {
    let entrees = in_category(items, Category::Entree);
    let mains = in_category(items, Category::Main);
    let beverages = in_category(items, Category::Beverage);

    let score_as = |item: &MenuItem, category: Category| {
        ScoredMenuItem::new(item.clone(), scoring::score(item, category, preference, allergies))
    };

    let entree = match entrees.first().copied() {
        Some(item) => with_entree_extras(score_as(item, Category::Entree)),
        None => placeholder(Category::Entree),
    };
    let main = match mains.first().copied() {
        Some(item) => with_main_extras(score_as(item, Category::Main)),
        None => placeholder(Category::Main),
    };
    let beverage = match beverages.first().copied() {
        Some(item) => {
            let mut scored = score_as(item, Category::Beverage);
            scored.adventure_alternative = Some(beverage_suggestion(profile, &item.name));
            scored
        }
        None => placeholder(Category::Beverage),
    };

    let alt_entree = second_distinct(&entrees);
    let alt_main = second_distinct(&mains);
    let alt_beverage = second_distinct(&beverages);

    let adventure = if alt_entree.is_some() || alt_main.is_some() || alt_beverage.is_some() {
        let entree = alt_entree
            .map(|item| with_entree_extras(score_as(item, Category::Entree)))
            .unwrap_or_else(|| entree.clone());
        let main = alt_main
            .map(|item| with_main_extras(score_as(item, Category::Main)))
            .unwrap_or_else(|| main.clone());
        let beverage = alt_beverage
            .map(|item| score_as(item, Category::Beverage))
            .unwrap_or_else(|| beverage.clone());
        let reason = adventure_reason(&entree, &main, &beverage);

        Some(AdventureAlternative {
            entree,
            main,
            beverage,
            reason,
        })
    } else {
        None
    };

    tracing::debug!(
        entrees = entrees.len(),
        mains = mains.len(),
        beverages = beverages.len(),
        adventure = adventure.is_some(),
        "Selected harmonization"
    );

    Selection {
        primary: Harmonization {
            entree,
            main,
            beverage,
        },
        adventure,
    }
}

/// Whether the menu mixes at least two dish types, making a preference question worthwhile.
pub fn should_ask_preference(items: &[MenuItem]) -> bool {
    let dish_types: HashSet<_> = items.iter().filter_map(|item| item.dish_type).collect();
    dish_types.len() >= 2
}

fn in_category(items: &[MenuItem], category: Category) -> Vec<&MenuItem> {
    items.iter().filter(|item| item.category == category).collect()
}

/// The next item in the course whose name differs from the first one.
fn second_distinct<'a>(course: &[&'a MenuItem]) -> Option<&'a MenuItem> {
    let (first, rest) = course.split_first()?;
    rest.iter()
        .find(|item| !item.name.eq_ignore_ascii_case(&first.name))
        .copied()
}

fn with_entree_extras(mut scored: ScoredMenuItem) -> ScoredMenuItem {
    scored.preparation_time = Some(ENTREE_PREPARATION_TIME.to_string());
    scored
}

fn with_main_extras(mut scored: ScoredMenuItem) -> ScoredMenuItem {
    scored.ingredients = Some(ingredients_of(&scored.item));
    scored
}

/// Ingredient list from the description, or a generic list when there is none.
fn ingredients_of(item: &MenuItem) -> Vec<String> {
    let listed: Vec<String> = item
        .description
        .as_deref()
        .map(|description| {
            description
                .split([',', ';'])
                .flat_map(|part| part.split(" and "))
                .flat_map(|part| part.split(" com "))
                .flat_map(|part| part.split(" e "))
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if listed.is_empty() {
        GENERIC_INGREDIENTS.iter().map(|s| s.to_string()).collect()
    } else {
        listed
    }
}

/// A contrasting drink: the region's signature drink when known, else the house suggestion.
fn beverage_suggestion(profile: Option<&RegionalProfile>, selected: &str) -> BeverageSuggestion {
    let regional = profile.and_then(|p| {
        p.typical_drinks
            .iter()
            .find(|drink| !drink.eq_ignore_ascii_case(selected))
    });

    match regional {
        Some(drink) => BeverageSuggestion {
            name: drink.to_string(),
            price: None,
            description: "Signature drink of the region".to_string(),
        },
        None => BeverageSuggestion {
            name: HOUSE_BEVERAGE_SUGGESTION.to_string(),
            price: Some(HOUSE_BEVERAGE_SUGGESTION_PRICE.to_string()),
            description: "An authentic Brazilian alternative".to_string(),
        },
    }
}

/// Stand-in for a course the menu does not offer.
pub fn placeholder(category: Category) -> ScoredMenuItem {
    let (name, description) = match category {
        Category::Entree => ("Entree unavailable", "No entree found on the menu"),
        Category::Main => ("Main course unavailable", "No main course found on the menu"),
        Category::Beverage => ("Beverage unavailable", "No beverage found on the menu"),
        Category::Dessert => ("Dessert unavailable", "No dessert found on the menu"),
    };

    let mut item = MenuItem::new(name, category);
    item.price = Some(NOT_AVAILABLE.to_string());
    item.description = Some(description.to_string());

    let mut scored = ScoredMenuItem::new(item, MIN_SCORE);
    scored.is_placeholder = true;
    match category {
        Category::Entree => scored.preparation_time = Some(NOT_AVAILABLE.to_string()),
        Category::Main => scored.ingredients = Some(vec![NOT_AVAILABLE.to_string()]),
        Category::Beverage | Category::Dessert => {}
    }
    scored
}

fn adventure_reason(entree: &ScoredMenuItem, main: &ScoredMenuItem, beverage: &ScoredMenuItem) -> String {
    format!(
        "Alternative combination from the same menu: {} to start, {} as the main course and {} to drink. \
         A different but still harmonious experience.",
        entree.name(),
        main.name(),
        beverage.name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::menu::{BeverageType, DishType};
    use crate::services::regional::lookup;

    fn item(name: &str, category: Category) -> MenuItem {
        MenuItem::new(name, category)
    }

    fn sample_menu() -> Vec<MenuItem> {
        let mut moqueca = item("Moqueca", Category::Main);
        moqueca.dish_type = Some(DishType::Seafood);
        let mut picanha = item("Picanha", Category::Main);
        picanha.dish_type = Some(DishType::Land);
        let mut wine = item("Vinho Tinto", Category::Beverage);
        wine.beverage_type = Some(BeverageType::RedWine);

        vec![
            item("Bruschetta", Category::Entree),
            moqueca,
            picanha,
            wine,
            item("Pudim", Category::Dessert),
        ]
    }

    #[test]
    fn test_first_in_category_wins_over_higher_score() {
        let selection = select(&sample_menu(), Preference::Land, &AllergySet::new());
        // Picanha would score higher for a land preference, but Moqueca is listed first.
        assert_eq!(selection.primary.main.name(), "Moqueca");
        assert_eq!(selection.primary.main.compatibility_score, 5);
        assert_eq!(selection.primary.entree.name(), "Bruschetta");
        assert_eq!(selection.primary.beverage.name(), "Vinho Tinto");
        assert_eq!(selection.primary.beverage.compatibility_score, 7);
    }

    #[test]
    fn test_missing_course_gets_placeholder() {
        let menu = vec![item("Feijoada", Category::Main)];
        let selection = select(&menu, Preference::Balanced, &AllergySet::new());
        assert!(selection.primary.entree.is_placeholder);
        assert!(selection.primary.beverage.is_placeholder);
        assert_eq!(selection.primary.beverage.compatibility_score, 1);
        assert_eq!(selection.primary.beverage.item.category, Category::Beverage);
        assert!(selection.primary.beverage.name().contains("unavailable"));
        assert!(!selection.primary.main.is_placeholder);
    }

    #[test]
    fn test_empty_menu_is_all_placeholders() {
        let selection = select(&[], Preference::Seafood, &AllergySet::new());
        assert!(selection.primary.iter().all(|s| s.is_placeholder));
        assert!(selection.adventure.is_none());
    }

    #[test]
    fn test_adventure_uses_next_item_and_falls_back() {
        let selection = select(&sample_menu(), Preference::Land, &AllergySet::new());
        let adventure = selection.adventure.expect("second main available");
        assert_eq!(adventure.main.name(), "Picanha");
        assert_eq!(adventure.main.compatibility_score, 8);
        assert_eq!(adventure.entree.name(), "Bruschetta");
        assert_eq!(adventure.beverage.name(), "Vinho Tinto");
        assert!(adventure.reason.contains("Picanha"));
    }

    #[test]
    fn test_duplicate_names_do_not_make_an_adventure() {
        let menu = vec![item("Feijoada", Category::Main), item("FEIJOADA", Category::Main)];
        let selection = select(&menu, Preference::Land, &AllergySet::new());
        assert!(selection.adventure.is_none());
    }

    #[test]
    fn test_course_extras() {
        let mut menu = sample_menu();
        menu[1].description = Some("peixe, leite de coco e dendê".to_string());
        let selection = select(&menu, Preference::Seafood, &AllergySet::new());
        assert_eq!(selection.primary.entree.preparation_time.as_deref(), Some("15 min"));
        assert_eq!(
            selection.primary.main.ingredients.as_deref(),
            Some(&["peixe".to_string(), "leite de coco".to_string(), "dendê".to_string()][..])
        );
        let suggestion = selection.primary.beverage.adventure_alternative.unwrap();
        assert_eq!(suggestion.name, "Caipirinha Premium");
    }

    #[test]
    fn test_regional_beverage_suggestion() {
        let rs = lookup("RS").unwrap();
        let selection = select_with_region(&sample_menu(), Preference::Land, &AllergySet::new(), Some(rs));
        let suggestion = selection.primary.beverage.adventure_alternative.unwrap();
        assert_eq!(suggestion.name, "Cerveja Polar");
    }

    #[test]
    fn test_should_ask_preference() {
        assert!(should_ask_preference(&sample_menu()));
        let single = vec![item("Feijoada", Category::Main)];
        assert!(!should_ask_preference(&single));
    }
}
