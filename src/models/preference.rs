use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::models::menu::DishType;

/// Diner's macro food preference for the meal.
///
/// Parses from the English tags and from the Portuguese tags used by the
/// mobile client.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, Display,
    AsRefStr, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Preference {
    #[strum(to_string = "seafood", serialize = "frutos-do-mar")]
    #[serde(alias = "frutos-do-mar")]
    Seafood,
    #[strum(to_string = "land", serialize = "terra")]
    #[serde(alias = "terra")]
    Land,
    #[strum(to_string = "vegetarian", serialize = "vegetariano")]
    #[serde(alias = "vegetariano")]
    Vegetarian,
    #[default]
    #[strum(to_string = "balanced", serialize = "tanto-faz")]
    #[serde(alias = "tanto-faz")]
    Balanced,
}

impl Preference {
    /// The dish type this preference favours, if any.
    pub fn dish_type(self) -> Option<DishType> {
        match self {
            Preference::Seafood => Some(DishType::Seafood),
            Preference::Land => Some(DishType::Land),
            Preference::Vegetarian => Some(DishType::Vegetarian),
            Preference::Balanced => None,
        }
    }
}

/// Allergy tags the diner can declare.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumString,
    Display, AsRefStr, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Allergy {
    Shellfish,
    Nuts,
    Dairy,
    Gluten,
    Eggs,
    Soy,
    Fish,
}

/// Set of declared allergies. Unknown tags are dropped rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AllergySet(BTreeSet<Allergy>);

impl AllergySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from free-form tags, ignoring anything outside the vocabulary.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for tag in tags {
            let tag = tag.as_ref().trim();
            if tag.is_empty() || tag.eq_ignore_ascii_case("none") {
                continue;
            }
            match Allergy::from_str(tag) {
                Ok(allergy) => {
                    set.insert(allergy);
                }
                Err(_) => tracing::debug!(tag = %tag, "Ignoring unrecognized allergy tag"),
            }
        }
        Self(set)
    }

    pub fn insert(&mut self, allergy: Allergy) -> bool {
        self.0.insert(allergy)
    }

    pub fn contains(&self, allergy: Allergy) -> bool {
        self.0.contains(&allergy)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Allergy> + '_ {
        self.0.iter().copied()
    }
}

impl<'de> Deserialize<'de> for AllergySet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tags = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::from_tags(tags))
    }
}

impl FromIterator<Allergy> for AllergySet {
    fn from_iter<T: IntoIterator<Item = Allergy>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_parses_both_vocabularies() {
        assert_eq!(Preference::from_str("seafood").unwrap(), Preference::Seafood);
        assert_eq!(Preference::from_str("frutos-do-mar").unwrap(), Preference::Seafood);
        assert_eq!(Preference::from_str("Terra").unwrap(), Preference::Land);
        assert_eq!(Preference::from_str("tanto-faz").unwrap(), Preference::Balanced);
        assert!(Preference::from_str("carnivore").is_err());
    }

    #[test]
    fn test_preference_displays_english_tag() {
        assert_eq!(Preference::Seafood.to_string(), "seafood");
        assert_eq!(Preference::Balanced.to_string(), "balanced");
    }

    #[test]
    fn test_allergy_set_ignores_unknown_tags() {
        let set = AllergySet::from_tags(["fish", "Gluten", "peanut-butter", "none", ""]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Allergy::Fish));
        assert!(set.contains(Allergy::Gluten));
    }

    #[test]
    fn test_allergy_set_deserializes_from_array() {
        let set: AllergySet = serde_json::from_str(r#"["dairy", "soy", "kiwi"]"#).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(Allergy::Dairy));
        assert!(set.contains(Allergy::Soy));
    }
}
