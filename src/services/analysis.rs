use chrono::Utc;
use uuid::Uuid;

use crate::models::analysis::MenuAnalysis;
use crate::models::preference::{AllergySet, Preference};
use crate::models::recommendation::{HarmonizationRecommendation, ScoredMenuItem};
use crate::services::regional::{self, RegionalProfile};
use crate::services::{composer, extraction, harmonization, parser, scoring};

/// Run the whole pipeline over recognized menu text.
///
/// parse -> resolve region -> enrich -> select -> compose. Never fails: an
/// unknown region means no regional adjustment and missing courses become
/// placeholders, both reported through `warnings`.
pub fn analyze_menu(
    text: &str,
    preference: Preference,
    allergies: &AllergySet,
    region: Option<&str>,
) -> MenuAnalysis {
    let (region, profile, mut warnings) = resolve_region(region);

    let items = extraction::enrich_all(parser::parse(text), profile);
    let profile = (!profile.is_default()).then_some(profile);
    let selection = harmonization::select_with_region(&items, preference, allergies, profile);
    let recommendation = composer::compose(selection.primary, selection.adventure);

    warnings.extend(recommendation_warnings(&recommendation, allergies));

    tracing::info!(
        items = items.len(),
        preference = %preference,
        allergies = allergies.len(),
        region = region.as_deref().unwrap_or("-"),
        overall_score = recommendation.overall_score,
        warnings = warnings.len(),
        "Menu analysis complete"
    );

    MenuAnalysis {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        region,
        items,
        preference,
        allergies: allergies.clone(),
        recommendation,
        warnings,
    }
}

fn resolve_region(code: Option<&str>) -> (Option<String>, &'static RegionalProfile, Vec<String>) {
    let Some(code) = code.map(str::trim).filter(|c| !c.is_empty()) else {
        return (None, regional::profile_or_default(None), Vec::new());
    };

    match regional::lookup(code) {
        Ok(profile) => (Some(code.to_ascii_uppercase()), profile, Vec::new()),
        Err(e) => {
            tracing::warn!(error = %e, "No regional profile, using defaults");
            (None, regional::profile_or_default(None), vec![format!("{e}; no regional adjustment applied")])
        }
    }
}

/// One warning per missing course and one per selected item hit by an allergy rule.
pub fn recommendation_warnings(
    recommendation: &HarmonizationRecommendation,
    allergies: &AllergySet,
) -> Vec<String> {
    let courses: [(&str, &ScoredMenuItem); 3] = [
        ("entree", &recommendation.entree),
        ("main course", &recommendation.main),
        ("beverage", &recommendation.beverage),
    ];

    let mut warnings = Vec::new();
    for (course, scored) in courses {
        if scored.is_placeholder {
            warnings.push(format!("The menu has no {course}; a placeholder was used"));
            continue;
        }
        let triggered = scoring::triggered_allergies(&scored.item, allergies);
        if !triggered.is_empty() {
            let tags: Vec<String> = triggered.iter().map(ToString::to_string).collect();
            warnings.push(format!(
                "{} may conflict with declared allergies ({}); score {}/10",
                scored.name(),
                tags.join(", "),
                scored.compatibility_score
            ));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::menu::Category;

    const MENU: &str = "Entrada: Bruschetta R$ 28\n\
                        Moqueca de Peixe R$ 78\n\
                        Picanha na Brasa R$ 89\n\
                        Vinho Branco Seco R$ 45\n\
                        Caipirinha R$ 22";

    #[test]
    fn test_full_pipeline() {
        let analysis = analyze_menu(MENU, Preference::Seafood, &AllergySet::new(), Some("sp"));

        assert_eq!(analysis.items.len(), 5);
        assert_eq!(analysis.region.as_deref(), Some("SP"));
        let rec = &analysis.recommendation;
        assert_eq!(rec.main.name(), "Moqueca de Peixe");
        assert_eq!(rec.main.item.price.as_deref(), Some("R$ 78"));
        assert_eq!(rec.beverage.name(), "Vinho Branco Seco");
        assert!(rec.adventure_alternative.is_some());
        assert!(analysis.warnings.is_empty());
    }

    #[test]
    fn test_allergy_warning() {
        let allergies = AllergySet::from_tags(["fish"]);
        let analysis = analyze_menu(MENU, Preference::Seafood, &allergies, None);
        assert_eq!(analysis.warnings.len(), 1);
        assert!(analysis.warnings[0].starts_with("Moqueca de Peixe"));
        assert!(analysis.warnings[0].contains("fish"));
    }

    #[test]
    fn test_missing_courses_warn() {
        let analysis = analyze_menu("Feijoada", Preference::Land, &AllergySet::new(), None);
        assert_eq!(analysis.warnings.len(), 2);
        assert!(analysis.recommendation.entree.is_placeholder);
        assert!(analysis.recommendation.beverage.is_placeholder);
        assert_eq!(analysis.recommendation.beverage.item.category, Category::Beverage);
    }

    #[test]
    fn test_unknown_region_degrades() {
        let analysis = analyze_menu(MENU, Preference::Land, &AllergySet::new(), Some("XX"));
        assert!(analysis.region.is_none());
        assert!(analysis.warnings.iter().any(|w| w.contains("XX")));
        assert!(analysis.items.iter().all(|i| !i.is_regional));
    }

    #[test]
    fn test_empty_text() {
        let analysis = analyze_menu("  \n ", Preference::Balanced, &AllergySet::new(), None);
        assert!(analysis.items.is_empty());
        assert_eq!(analysis.recommendation.overall_score, 1);
        assert_eq!(analysis.warnings.len(), 3);
    }
}
