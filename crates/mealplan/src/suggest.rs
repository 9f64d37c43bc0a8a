use mealslot_shared::mealplan::{MealType, SlotKey};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashMap;
use strum::VariantArray;

use crate::entry::MealInput;
use crate::store::{Placement, PlanStore};

/// Source of candidate meals for [`PlanStore::auto_fill`].
pub trait PoolProvider {
    fn meal_pool<R: Rng + ?Sized>(&mut self, key: SlotKey, rng: &mut R) -> Vec<MealInput>;

    /// Second pool offered to every slot after the meal pool. `None` means no
    /// bonus pool is configured and each slot gets a single suggestion.
    fn bonus_pool<R: Rng + ?Sized>(
        &mut self,
        _key: SlotKey,
        _rng: &mut R,
    ) -> Option<Vec<MealInput>> {
        None
    }
}

/// Fixed pools per meal type, with an optional bonus pool.
#[derive(Debug, Clone, Default)]
pub struct StaticPools {
    pub meals: HashMap<MealType, Vec<MealInput>>,
    pub bonus: Option<Vec<MealInput>>,
}

impl StaticPools {
    /// Same pool for every meal type
    pub fn uniform(pool: Vec<MealInput>) -> Self {
        let meals = MealType::VARIANTS
            .iter()
            .map(|meal_type| (*meal_type, pool.clone()))
            .collect();

        Self { meals, bonus: None }
    }

    pub fn with_bonus(mut self, pool: Vec<MealInput>) -> Self {
        self.bonus = Some(pool);
        self
    }
}

impl PoolProvider for StaticPools {
    fn meal_pool<R: Rng + ?Sized>(&mut self, key: SlotKey, _rng: &mut R) -> Vec<MealInput> {
        self.meals.get(&key.meal_type).cloned().unwrap_or_default()
    }

    fn bonus_pool<R: Rng + ?Sized>(
        &mut self,
        _key: SlotKey,
        _rng: &mut R,
    ) -> Option<Vec<MealInput>> {
        self.bonus.clone()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoFillReport {
    pub inserted: usize,
    pub slot_full: usize,
    pub empty_pool: usize,
}

impl AutoFillReport {
    fn record(&mut self, placement: Placement) {
        match placement {
            Placement::Inserted => self.inserted += 1,
            Placement::SlotFull => self.slot_full += 1,
            Placement::EmptyPool => self.empty_pool += 1,
        }
    }
}

impl PlanStore {
    /// Adds one meal picked uniformly at random from `pool`.
    pub fn suggest_random<R: Rng + ?Sized>(
        &mut self,
        key: SlotKey,
        pool: &[MealInput],
        rng: &mut R,
    ) -> mealslot_shared::Result<Placement> {
        let Some(candidate) = pool.choose(rng) else {
            tracing::debug!(%key, "no candidate to suggest");
            return Ok(Placement::EmptyPool);
        };

        self.add_meal(key, candidate.clone())
    }

    /// Runs [`PlanStore::suggest_random`] over every slot of the horizon,
    /// day-major then meal type order, once from the meal pool and once more
    /// from the bonus pool when the provider has one.
    ///
    /// Slots keep their capacity: a bonus meal reaching a full slot is
    /// dropped and counted in [`AutoFillReport::slot_full`].
    pub fn auto_fill<P, R>(
        &mut self,
        provider: &mut P,
        rng: &mut R,
    ) -> mealslot_shared::Result<AutoFillReport>
    where
        P: PoolProvider,
        R: Rng + ?Sized,
    {
        let keys = self.horizon().slots().collect::<Vec<_>>();
        let mut report = AutoFillReport::default();

        for key in keys {
            let pool = provider.meal_pool(key, rng);
            report.record(self.suggest_random(key, &pool, rng)?);

            if let Some(bonus) = provider.bonus_pool(key, rng) {
                report.record(self.suggest_random(key, &bonus, rng)?);
            }
        }

        tracing::info!(
            inserted = report.inserted,
            slot_full = report.slot_full,
            empty_pool = report.empty_pool,
            "horizon auto-filled"
        );

        Ok(report)
    }
}
