use mealslot_shared::mealplan::{DayIndex, MealType, SlotKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::VariantArray;

use crate::store::PlanStore;

pub const DEFAULT_CALORIE_GOAL: u32 = 1800;
pub const CALORIE_GOAL_RANGE: std::ops::RangeInclusive<u32> = 1200..=5000;
pub const DEFAULT_WATER_CUPS: u8 = 8;
pub const MAX_WATER_CUPS: u8 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct DayTotals {
    pub day: DayIndex,
    pub label: String,
    pub calories: f64,
    pub entries: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanTotals {
    pub days: Vec<DayTotals>,
    pub calories: f64,
    pub entries: usize,
}

impl PlanStore {
    /// Calories and entry count per day across its three slots, plus the
    /// horizon-wide sums.
    pub fn weekly_totals(&self) -> PlanTotals {
        let days = self
            .horizon()
            .days()
            .iter()
            .map(|day| {
                let (calories, entries) = MealType::VARIANTS.iter().fold(
                    (0.0, 0),
                    |(calories, entries), meal_type| {
                        let key = SlotKey {
                            day: day.index,
                            meal_type: *meal_type,
                        };
                        (
                            calories + self.slot_calories(key),
                            entries + self.slot_len(key),
                        )
                    },
                );

                DayTotals {
                    day: day.index,
                    label: day.label.to_owned(),
                    calories,
                    entries,
                }
            })
            .collect::<Vec<_>>();

        PlanTotals {
            calories: days.iter().map(|d| d.calories).sum(),
            entries: days.iter().map(|d| d.entries).sum(),
            days,
        }
    }
}

/// Daily targets shown next to totals, never enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goals {
    pub calories: u32,
    pub water_cups: u8,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            calories: DEFAULT_CALORIE_GOAL,
            water_cups: DEFAULT_WATER_CUPS,
        }
    }
}

impl Goals {
    pub fn new(calories: u32, water_cups: u8) -> mealslot_shared::Result<Self> {
        if !CALORIE_GOAL_RANGE.contains(&calories) {
            mealslot_shared::bail!(
                "calorie goal must be between {} and {}, got {calories}",
                CALORIE_GOAL_RANGE.start(),
                CALORIE_GOAL_RANGE.end()
            );
        }

        if water_cups > MAX_WATER_CUPS {
            mealslot_shared::bail!("water goal must be at most {MAX_WATER_CUPS} cups");
        }

        Ok(Self {
            calories,
            water_cups,
        })
    }
}

/// Cups of water logged per day, display only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaterIntake(BTreeMap<DayIndex, u8>);

impl WaterIntake {
    pub fn cups(&self, day: DayIndex) -> u8 {
        self.0.get(&day).copied().unwrap_or(DEFAULT_WATER_CUPS)
    }

    /// Records `cups`, capped at [`MAX_WATER_CUPS`].
    pub fn set(&mut self, day: DayIndex, cups: u8) {
        self.0.insert(day, cups.min(MAX_WATER_CUPS));
    }
}
