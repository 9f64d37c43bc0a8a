use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum CuisineType {
    #[default]
    Random,
    Italian,
    Chinese,
    Indian,
    Mexican,
    Japanese,
}

impl CuisineType {
    /// Value sent as the recipe search cuisine filter, `None` for `Random`.
    pub fn filter(&self) -> Option<&'static str> {
        match self {
            CuisineType::Random => None,
            CuisineType::Italian => Some("Italian"),
            CuisineType::Chinese => Some("Chinese"),
            CuisineType::Indian => Some("Indian"),
            CuisineType::Mexican => Some("Mexican"),
            CuisineType::Japanese => Some("Japanese"),
        }
    }
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Diet {
    Vegetarian,
    Vegan,
    #[strum(serialize = "Gluten-Free")]
    GlutenFree,
    Keto,
}

impl Diet {
    pub fn api_value(&self) -> &'static str {
        match self {
            Diet::Vegetarian => "vegetarian",
            Diet::Vegan => "vegan",
            Diet::GlutenFree => "gluten free",
            Diet::Keto => "ketogenic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(CuisineType::from_str("italian").unwrap(), CuisineType::Italian);
        assert_eq!(Diet::from_str("gluten-free").unwrap(), Diet::GlutenFree);
        assert!(Diet::from_str("paleo").is_err());
    }

    #[test]
    fn test_random_has_no_filter() {
        assert_eq!(CuisineType::Random.filter(), None);
        assert_eq!(CuisineType::Mexican.filter(), Some("Mexican"));
        assert_eq!(Diet::Keto.api_value(), "ketogenic");
    }
}
