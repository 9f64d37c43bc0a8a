use mealslot_shared::mealplan::{Rating, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::macros::{Macros, estimate};

pub const UNTITLED_MEAL: &str = "Untitled Meal";
pub const PROTEIN_FLOOR: f64 = 10.0;
pub const PROTEIN_FLOOR_BUMP: f64 = 5.0;
pub const CALORIE_FLOOR_BUMP: f64 = 20.0;

/// Raw meal fields as submitted by a form, a recipe search or a catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealInput {
    pub title: Option<String>,
    pub calories: f64,
    pub protein: Option<f64>,
    pub fat: Option<f64>,
    pub carbs: Option<f64>,
}

impl MealInput {
    pub fn new(title: impl Into<String>, calories: f64) -> Self {
        Self {
            title: Some(title.into()),
            calories,
            ..Default::default()
        }
    }

    pub fn with_macros(mut self, protein: f64, fat: f64, carbs: f64) -> Self {
        self.protein = Some(protein);
        self.fat = Some(fat);
        self.carbs = Some(carbs);
        self
    }

    /// Measured macros where given, estimated from calories for the rest.
    pub fn macros(&self) -> Macros {
        let calories = non_negative(self.calories);
        let needs_estimate = self.protein.is_none() || self.fat.is_none() || self.carbs.is_none();
        let estimated = if needs_estimate {
            estimate(calories)
        } else {
            Macros::default()
        };

        Macros {
            protein: self.protein.map(non_negative).unwrap_or(estimated.protein),
            fat: self.fat.map(non_negative).unwrap_or(estimated.fat),
            carbs: self.carbs.map(non_negative).unwrap_or(estimated.carbs),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    pub title: String,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub note: String,
    pub tags: BTreeSet<Tag>,
    pub rating: Rating,
}

impl MealEntry {
    /// Builds a new entry and applies the protein floor correction.
    ///
    /// Entries under [`PROTEIN_FLOOR`] grams of protein gain
    /// [`PROTEIN_FLOOR_BUMP`] grams and [`CALORIE_FLOOR_BUMP`] kcal. This only
    /// ever happens here, edits never run it again.
    pub fn from_input(input: MealInput) -> Self {
        let macros = input.macros();
        let mut calories = non_negative(input.calories);
        let mut protein = macros.protein;

        if protein < PROTEIN_FLOOR {
            protein += PROTEIN_FLOOR_BUMP;
            calories += CALORIE_FLOOR_BUMP;
        }

        let title = match input.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title_case(title),
            _ => UNTITLED_MEAL.to_owned(),
        };

        Self {
            title,
            calories,
            protein,
            fat: macros.fat,
            carbs: macros.carbs,
            note: String::new(),
            tags: BTreeSet::new(),
            rating: Rating::default(),
        }
    }

    pub fn macros(&self) -> Macros {
        Macros {
            protein: self.protein,
            fat: self.fat,
            carbs: self.carbs,
        }
    }
}

/// Fields a planned entry may change after creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryEdit {
    pub note: Option<String>,
    pub tags: Option<BTreeSet<Tag>>,
    pub rating: Option<u8>,
}

impl EntryEdit {
    pub fn note(note: impl Into<String>) -> Self {
        Self {
            note: Some(note.into()),
            ..Default::default()
        }
    }
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the
/// rest, so `"grilled CHICKEN salad"` becomes `"Grilled Chicken Salad"`.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;

    for c in name.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
