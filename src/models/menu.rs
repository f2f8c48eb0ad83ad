use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Menu section a recognized line belongs to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
    AsRefStr, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Category {
    Entree,
    #[default]
    Main,
    Beverage,
    Dessert,
}

/// Relative price bucket, after regional scaling.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PriceRange {
    Low,
    Medium,
    High,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display, AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum BeverageType {
    Beer,
    RedWine,
    WhiteWine,
    Sparkling,
    AlcoholicDrink,
    NonAlcoholicDrink,
    NaturalJuice,
    IndustrialJuice,
    HouseSpecial,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
    AsRefStr, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DishType {
    Seafood,
    Land,
    Vegetarian,
}

/// One entry read off a menu.
///
/// Created once per scan and never mutated afterwards; enrichment produces a
/// new value. `beverage_type` is only meaningful for beverages and `dish_type`
/// only for entrees and mains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    pub category: Category,

    /// Display-formatted price, e.g. "R$ 82". Never parsed into a currency amount here.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price_range: Option<PriceRange>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub beverage_type: Option<BeverageType>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dish_type: Option<DishType>,
    #[serde(default)]
    pub is_regional: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cultural_info: Option<String>,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
            price: None,
            description: None,
            price_range: None,
            beverage_type: None,
            dish_type: None,
            is_regional: false,
            cultural_info: None,
        }
    }
}
