use serde::{Deserialize, Serialize};

pub const PROTEIN_CALORIE_SHARE: f64 = 0.25;
pub const FAT_CALORIE_SHARE: f64 = 0.25;
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Grams of protein, fat and carbohydrate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl Macros {
    /// Energy of these macros in kcal
    pub fn calories(&self) -> f64 {
        self.protein * KCAL_PER_GRAM_PROTEIN
            + self.fat * KCAL_PER_GRAM_FAT
            + self.carbs * KCAL_PER_GRAM_CARBS
    }
}

/// Rounds to one decimal place, ties to even (`18.25` gives `18.2`).
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Splits `calories` into macros when no measured values exist.
///
/// A quarter of the calories goes to protein, a quarter to fat and the
/// remainder to carbohydrates. Non-positive or non-finite calories give zero
/// macros, and any negative intermediate result is clamped to zero.
pub fn estimate(calories: f64) -> Macros {
    if !calories.is_finite() || calories <= 0.0 {
        return Macros::default();
    }

    let protein = round1(calories * PROTEIN_CALORIE_SHARE / KCAL_PER_GRAM_PROTEIN).max(0.0);
    let fat = round1(calories * FAT_CALORIE_SHARE / KCAL_PER_GRAM_FAT).max(0.0);
    let remainder = calories - (protein * KCAL_PER_GRAM_PROTEIN + fat * KCAL_PER_GRAM_FAT);
    let carbs = round1(remainder / KCAL_PER_GRAM_CARBS).max(0.0);

    Macros {
        protein,
        fat,
        carbs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_300_kcal() {
        let macros = estimate(300.0);

        assert_eq!(macros.protein, 18.8);
        assert_eq!(macros.fat, 8.3);
        assert_eq!(macros.carbs, 37.5);
    }

    #[test]
    fn test_estimate_reconstructs_calories() {
        for half_kcal in 0..=10_000 {
            let calories = half_kcal as f64 * 0.5;
            let macros = estimate(calories);

            assert!(macros.protein >= 0.0, "protein for {calories}");
            assert!(macros.fat >= 0.0, "fat for {calories}");
            assert!(macros.carbs >= 0.0, "carbs for {calories}");
            assert!(
                (macros.calories() - calories).abs() <= 0.2 + 1e-9,
                "{calories} kcal rebuilt as {}",
                macros.calories()
            );
        }
    }

    #[test]
    fn test_estimate_non_positive_is_zero() {
        assert_eq!(estimate(0.0), Macros::default());
        assert_eq!(estimate(-120.0), Macros::default());
        assert_eq!(estimate(f64::NAN), Macros::default());
    }

    #[test]
    fn test_round1_ties_to_even() {
        assert_eq!(round1(18.25), 18.2);
        assert_eq!(round1(18.75), 18.8);
        assert_eq!(round1(1.25), 1.2);
        assert_eq!(round1(8.333), 8.3);
        assert_eq!(round1(0.04), 0.0);
    }

    #[test]
    fn test_estimate_on_rounding_ties() {
        let macros = estimate(292.0);
        assert_eq!(macros.protein, 18.2);
        assert_eq!(macros.fat, 8.1);
        assert_eq!(macros.carbs, 36.6);

        assert_eq!(estimate(20.0).protein, 1.2);
        assert_eq!(estimate(180.0).protein, 11.2);
    }
}
