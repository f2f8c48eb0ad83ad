use crate::models::recommendation::{
    AdventureAlternative, AdventureLevel, Harmonization, HarmonizationRecommendation, ScoredMenuItem,
    MAX_SCORE, MIN_SCORE,
};

/// Estimated duration of a three-course experience.
pub const TOTAL_EXPERIENCE_TIME: &str = "45-60 minutes";

/// Assemble the final recommendation from the selected courses.
///
/// Thin by intent: the overall score is the rounded mean of the three item
/// scores and everything else is templated text.
pub fn compose(
    selected: Harmonization,
    adventure: Option<AdventureAlternative>,
) -> HarmonizationRecommendation {
    let overall_score = overall_score(&selected);
    let justification = justification(&selected, overall_score);
    let sommelier_tip = sommelier_tip(&selected.main, &selected.beverage);

    let Harmonization {
        entree,
        main,
        beverage,
    } = selected;

    HarmonizationRecommendation {
        entree,
        main,
        beverage,
        overall_score,
        justification,
        adventure_alternative: adventure,
        sommelier_tip,
        total_experience_time: TOTAL_EXPERIENCE_TIME.to_string(),
        adventure_level: AdventureLevel::Balanced,
    }
}

fn overall_score(selected: &Harmonization) -> u8 {
    let sum: u32 = selected.iter().map(|s| u32::from(s.compatibility_score)).sum();
    let mean = (f64::from(sum) / 3.0).round() as u8;
    mean.clamp(MIN_SCORE, MAX_SCORE)
}

fn justification(selected: &Harmonization, overall_score: u8) -> String {
    format!(
        "Combination chosen for your preferences: {} ({}/10) to start, {} ({}/10) as the main course \
         and {} ({}/10) to drink, for an overall harmony of {}/10.",
        selected.entree.name(),
        selected.entree.compatibility_score,
        selected.main.name(),
        selected.main.compatibility_score,
        selected.beverage.name(),
        selected.beverage.compatibility_score,
        overall_score
    )
}

// No tip when either side of the pairing is a stand-in.
fn sommelier_tip(main: &ScoredMenuItem, beverage: &ScoredMenuItem) -> Option<String> {
    if main.is_placeholder || beverage.is_placeholder {
        return None;
    }
    Some(format!(
        "{} complements {} perfectly.",
        beverage.name(),
        main.name()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::menu::{Category, MenuItem};
    use crate::services::harmonization::placeholder;

    fn scored(name: &str, category: Category, score: u8) -> ScoredMenuItem {
        ScoredMenuItem::new(MenuItem::new(name, category), score)
    }

    fn triple(entree: u8, main: u8, beverage: u8) -> Harmonization {
        Harmonization {
            entree: scored("Bruschetta", Category::Entree, entree),
            main: scored("Picanha", Category::Main, main),
            beverage: scored("Vinho Tinto", Category::Beverage, beverage),
        }
    }

    #[test]
    fn test_overall_score_is_rounded_mean() {
        assert_eq!(compose(triple(5, 8, 7), None).overall_score, 7); // 6.67
        assert_eq!(compose(triple(5, 5, 6), None).overall_score, 5); // 5.33
        assert_eq!(compose(triple(6, 7, 10), None).overall_score, 8); // 7.67
        assert_eq!(compose(triple(1, 1, 1), None).overall_score, 1);
    }

    #[test]
    fn test_overall_score_stays_in_range() {
        assert_eq!(compose(triple(1, 1, 2), None).overall_score, 1);
        assert_eq!(compose(triple(10, 10, 9), None).overall_score, 10);
    }

    #[test]
    fn test_fixed_fields() {
        let recommendation = compose(triple(5, 8, 7), None);
        assert_eq!(recommendation.adventure_level, AdventureLevel::Balanced);
        assert_eq!(recommendation.total_experience_time, "45-60 minutes");
        assert!(recommendation.adventure_alternative.is_none());
    }

    #[test]
    fn test_justification_mentions_names_and_scores() {
        let recommendation = compose(triple(5, 8, 7), None);
        let text = &recommendation.justification;
        assert!(text.contains("Bruschetta (5/10)"));
        assert!(text.contains("Picanha (8/10)"));
        assert!(text.contains("Vinho Tinto (7/10)"));
        assert!(text.contains("7/10."));
    }

    #[test]
    fn test_sommelier_tip() {
        let recommendation = compose(triple(5, 8, 7), None);
        assert_eq!(
            recommendation.sommelier_tip.as_deref(),
            Some("Vinho Tinto complements Picanha perfectly.")
        );

        let mut selected = triple(5, 8, 7);
        selected.beverage = placeholder(Category::Beverage);
        assert!(compose(selected, None).sommelier_tip.is_none());
    }

    #[test]
    fn test_placeholder_drags_overall_score() {
        let mut selected = triple(8, 8, 8);
        selected.beverage = placeholder(Category::Beverage);
        let recommendation = compose(selected, None);
        // (8 + 8 + 1) / 3 = 5.67
        assert_eq!(recommendation.overall_score, 6);
        assert!(recommendation.has_placeholder());
    }
}
