use mealslot_mealplan::MealInput;
use mealslot_shared::recipe::{CuisineType, Diet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const PROTEIN_CODE: &str = "PROCNT";
pub const FAT_CODE: &str = "FAT";
pub const CARBS_CODE: &str = "CHOCDF";

pub const MAX_PAGE_SIZE: u8 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrient {
    #[serde(default)]
    pub label: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    #[serde(default)]
    pub calories: f64,
    #[serde(rename = "totalNutrients", default)]
    pub nutrients: BTreeMap<String, Nutrient>,
}

impl NutritionFacts {
    /// Quantity of a nutrient code, `None` when the provider did not report it.
    pub fn quantity(&self, code: &str) -> Option<f64> {
        self.nutrients.get(code).map(|n| n.quantity)
    }

    pub fn protein(&self) -> Option<f64> {
        self.quantity(PROTEIN_CODE)
    }

    pub fn fat(&self) -> Option<f64> {
        self.quantity(FAT_CODE)
    }

    pub fn carbs(&self) -> Option<f64> {
        self.quantity(CARBS_CODE)
    }

    pub fn to_meal_input(&self, title: impl Into<String>) -> MealInput {
        MealInput {
            title: Some(title.into()),
            calories: self.calories,
            protein: self.protein(),
            fat: self.fat(),
            carbs: self.carbs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeNutrient {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub title: String,
    pub source_url: Option<String>,
    pub nutrients: Vec<RecipeNutrient>,
}

impl RecipeSummary {
    pub fn nutrient(&self, name: &str) -> Option<f64> {
        self.nutrients
            .iter()
            .find(|n| n.name.eq_ignore_ascii_case(name))
            .map(|n| n.amount)
    }

    /// Missing macros stay unknown and are estimated when the meal is planned.
    pub fn to_meal_input(&self) -> MealInput {
        MealInput {
            title: Some(self.title.to_owned()),
            calories: self.nutrient("Calories").unwrap_or_default(),
            protein: self.nutrient("Protein"),
            fat: self.nutrient("Fat"),
            carbs: self.nutrient("Carbohydrates"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeQuery {
    pub query: String,
    pub cuisine: CuisineType,
    pub diets: Vec<Diet>,
    pub number: u8,
}

impl RecipeQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            cuisine: CuisineType::Random,
            diets: vec![],
            number: MAX_PAGE_SIZE,
        }
    }

    pub fn cuisine(mut self, cuisine: CuisineType) -> Self {
        self.cuisine = cuisine;
        self
    }

    pub fn diets(mut self, diets: impl Into<Vec<Diet>>) -> Self {
        self.diets = diets.into();
        self
    }

    pub fn number(mut self, number: u8) -> Self {
        self.number = number;
        self
    }

    pub(crate) fn page_size(&self) -> u8 {
        self.number.clamp(1, MAX_PAGE_SIZE)
    }

    pub(crate) fn diet_filter(&self) -> Option<String> {
        if self.diets.is_empty() {
            return None;
        }

        Some(
            self.diets
                .iter()
                .map(|d| d.api_value())
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResult {
    pub title: String,
    #[serde(rename = "sourceUrl")]
    pub source_url: Option<String>,
    pub nutrition: Option<SearchNutrition>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchNutrition {
    #[serde(default)]
    pub nutrients: Vec<RecipeNutrient>,
}

impl From<SearchResult> for RecipeSummary {
    fn from(value: SearchResult) -> Self {
        Self {
            title: value.title,
            source_url: value.source_url,
            nutrients: value.nutrition.map(|n| n.nutrients).unwrap_or_default(),
        }
    }
}
