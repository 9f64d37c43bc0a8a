use mealslot_shared::Day;
use mealslot_shared::mealplan::{MealType, SlotKey};
use mealslot_shared::recipe::CuisineType;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::ops::RangeInclusive;
use strum::VariantArray;

use crate::entry::MealInput;
use crate::macros::estimate;
use crate::suggest::PoolProvider;

pub const FRUIT_POOL: &str = "fruit";
pub const MOCK_CALORIES: RangeInclusive<u32> = 280..=480;
pub const MOCK_SAMPLE_SIZE: usize = 2;

const BREAKFAST: &[&str] = &["Avocado Toast", "Chia Seed Pudding", "Breakfast Burrito"];
const LUNCH: &[&str] = &["Grilled Chicken Salad", "Tofu Stir-Fry", "Falafel Wrap"];
const DINNER: &[&str] = &["Shrimp Tacos", "Risotto", "Moroccan Chickpea Stew"];
const FRUIT: &[&str] = &["Fruit Bowl", "Berry Smoothie Bowl", "Banana Chia Cups"];

fn mock_titles(pool: &str) -> &'static [&'static str] {
    let pool = pool.trim();
    if pool.eq_ignore_ascii_case(MealType::Breakfast.as_ref()) {
        BREAKFAST
    } else if pool.eq_ignore_ascii_case(MealType::Lunch.as_ref()) {
        LUNCH
    } else if pool.eq_ignore_ascii_case(MealType::Dinner.as_ref()) {
        DINNER
    } else if pool.eq_ignore_ascii_case(FRUIT_POOL) {
        FRUIT
    } else {
        &[]
    }
}

/// Up to two distinct recipes from the local pool named `pool` (a meal type
/// or `fruit`), each with random calories and estimated macros. Unknown pool
/// names give nothing.
pub fn mock_recipes<R: Rng + ?Sized>(pool: &str, rng: &mut R) -> Vec<MealInput> {
    mock_titles(pool)
        .choose_multiple(rng, MOCK_SAMPLE_SIZE)
        .map(|title| {
            let calories = rng.random_range(MOCK_CALORIES) as f64;
            let macros = estimate(calories);
            MealInput::new(*title, calories).with_macros(macros.protein, macros.fat, macros.carbs)
        })
        .collect()
}

/// Auto-fill provider backed by [`mock_recipes`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogPools {
    pub fruit_bonus: bool,
}

impl CatalogPools {
    pub fn new(fruit_bonus: bool) -> Self {
        Self { fruit_bonus }
    }
}

impl PoolProvider for CatalogPools {
    fn meal_pool<R: Rng + ?Sized>(&mut self, key: SlotKey, rng: &mut R) -> Vec<MealInput> {
        mock_recipes(key.meal_type.as_ref(), rng)
    }

    fn bonus_pool<R: Rng + ?Sized>(
        &mut self,
        _key: SlotKey,
        rng: &mut R,
    ) -> Option<Vec<MealInput>> {
        self.fruit_bonus.then(|| mock_recipes(FRUIT_POOL, rng))
    }
}

pub fn cuisine_dishes(cuisine: CuisineType) -> &'static [&'static str] {
    match cuisine {
        CuisineType::Random => &[],
        CuisineType::Italian => &[
            "Spaghetti Bolognese",
            "Margherita Pizza",
            "Risotto with Mushrooms",
            "Caprese Salad",
            "Bruschetta",
            "Lasagna",
        ],
        CuisineType::Chinese => &[
            "Kung Pao Chicken",
            "Mapo Tofu",
            "Sweet & Sour Pork",
            "Vegetable Chow Mein",
            "Chicken Fried Rice",
            "Dumplings",
        ],
        CuisineType::Indian => &[
            "Butter Chicken",
            "Chana Masala",
            "Palak Paneer",
            "Vegetable Biryani",
            "Dal Tadka",
            "Aloo Gobi",
        ],
        CuisineType::Mexican => &[
            "Beef Tacos",
            "Chicken Quesadilla",
            "Veggie Burrito",
            "Enchiladas",
            "Guacamole & Chips",
            "Chilaquiles",
        ],
        CuisineType::Japanese => &[
            "Sushi Rolls",
            "Ramen",
            "Miso Soup & Rice",
            "Teriyaki Chicken",
            "Tempura Vegetables",
            "Onigiri",
        ],
    }
}

/// One dish of `cuisine`. `Random` first picks a cuisine uniformly.
pub fn pick_dish<R: Rng + ?Sized>(cuisine: CuisineType, rng: &mut R) -> &'static str {
    let cuisine = match cuisine {
        CuisineType::Random => {
            let cuisines = CuisineType::VARIANTS
                .iter()
                .filter(|c| **c != CuisineType::Random)
                .copied()
                .collect::<Vec<_>>();
            cuisines.choose(rng).copied().unwrap_or(CuisineType::Italian)
        }
        cuisine => cuisine,
    };

    cuisine_dishes(cuisine).choose(rng).copied().unwrap_or_default()
}

/// A dish for every day of `days`.
pub fn daily_menu<'a, R: Rng + ?Sized>(
    days: &'a [Day],
    cuisine: CuisineType,
    rng: &mut R,
) -> Vec<(&'a Day, &'static str)> {
    days.iter().map(|day| (day, pick_dish(cuisine, rng))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_mock_recipes_sample_two_distinct_titles() {
        let mut rng = StdRng::seed_from_u64(7);
        let recipes = mock_recipes("Lunch", &mut rng);

        assert_eq!(recipes.len(), 2);
        assert_ne!(recipes[0].title, recipes[1].title);
        for recipe in &recipes {
            assert!(LUNCH.contains(&recipe.title.as_deref().unwrap()));
            assert!(MOCK_CALORIES.contains(&(recipe.calories as u32)));
            assert!(recipe.protein.unwrap() >= 10.0);
        }
    }

    #[test]
    fn test_mock_recipes_unknown_pool_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);

        assert!(mock_recipes("brunch", &mut rng).is_empty());
        assert_eq!(mock_recipes(" FRUIT ", &mut rng).len(), 2);
    }

    #[test]
    fn test_pick_dish_respects_cuisine() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..20 {
            let dish = pick_dish(CuisineType::Mexican, &mut rng);
            assert!(cuisine_dishes(CuisineType::Mexican).contains(&dish));
        }

        let dish = pick_dish(CuisineType::Random, &mut rng);
        assert!(!dish.is_empty());
    }

    #[test]
    fn test_catalog_bonus_toggle() {
        let mut rng = StdRng::seed_from_u64(1);
        let key = SlotKey::new(0, MealType::Dinner);

        assert!(CatalogPools::new(false).bonus_pool(key, &mut rng).is_none());
        assert!(CatalogPools::new(true).bonus_pool(key, &mut rng).is_some());
    }
}
