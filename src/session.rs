use mealslot_db::{PlanSnapshot, insert_plan};
use mealslot_gateway::{NutritionGateway, RecipeQuery, prefetch_pools};
use mealslot_mealplan::{
    AutoFillReport, CatalogPools, EntryEdit, Goals, MealEntry, MealInput, Placement, PlanStore,
    PoolProvider, WaterIntake,
};
use mealslot_shared::Horizon;
use mealslot_shared::mealplan::{DayIndex, SlotKey};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sqlx::SqlitePool;

/// One planning session: the plan, water intake, goals and the random source
/// used by every suggestion.
///
/// Remote lookups always complete before the plan is touched, a failed
/// request leaves it as it was.
#[derive(Debug)]
pub struct PlanSession {
    store: PlanStore,
    water: WaterIntake,
    goals: Goals,
    rng: StdRng,
}

impl PlanSession {
    pub fn new(horizon: Horizon, goals: Goals) -> Self {
        Self::with_rng(horizon, goals, StdRng::from_os_rng())
    }

    /// Same seed, same suggestions.
    pub fn with_seed(horizon: Horizon, goals: Goals, seed: u64) -> Self {
        Self::with_rng(horizon, goals, StdRng::seed_from_u64(seed))
    }

    fn with_rng(horizon: Horizon, goals: Goals, rng: StdRng) -> Self {
        Self {
            store: PlanStore::new(horizon),
            water: WaterIntake::default(),
            goals,
            rng,
        }
    }

    pub fn store(&self) -> &PlanStore {
        &self.store
    }

    pub fn horizon(&self) -> &Horizon {
        self.store.horizon()
    }

    pub fn goals(&self) -> Goals {
        self.goals
    }

    pub fn water(&self) -> &WaterIntake {
        &self.water
    }

    /// Logs cups of water for a day of the horizon, capped like [`WaterIntake::set`].
    pub fn set_water(&mut self, day: DayIndex, cups: u8) -> mealslot_shared::Result<()> {
        if !self.horizon().contains(day) {
            return Err(mealslot_shared::Error::UnknownDay(day));
        }

        self.water.set(day, cups);

        Ok(())
    }

    pub fn add_meal(&mut self, key: SlotKey, input: MealInput) -> mealslot_shared::Result<Placement> {
        self.store.add_meal(key, input)
    }

    pub fn clear_slot(&mut self, key: SlotKey) -> mealslot_shared::Result<()> {
        self.store.clear_slot(key)
    }

    pub fn edit_entry(
        &mut self,
        key: SlotKey,
        index: usize,
        edit: EntryEdit,
    ) -> mealslot_shared::Result<&MealEntry> {
        self.store.edit_entry(key, index, edit)
    }

    pub fn suggest(&mut self, key: SlotKey, pool: &[MealInput]) -> mealslot_shared::Result<Placement> {
        self.store.suggest_random(key, pool, &mut self.rng)
    }

    pub fn auto_fill<P: PoolProvider>(
        &mut self,
        provider: &mut P,
    ) -> mealslot_shared::Result<AutoFillReport> {
        self.store.auto_fill(provider, &mut self.rng)
    }

    /// Auto-fill from the built-in mock catalog.
    pub fn auto_fill_local(&mut self, fruit_bonus: bool) -> mealslot_shared::Result<AutoFillReport> {
        self.auto_fill(&mut CatalogPools::new(fruit_bonus))
    }

    /// Auto-fill from recipe searches, one per meal type plus a fruit search
    /// when `fruit_bonus` is set.
    pub async fn auto_fill_remote<G: NutritionGateway + ?Sized>(
        &mut self,
        gateway: &G,
        filters: &RecipeQuery,
        fruit_bonus: bool,
    ) -> mealslot_shared::Result<AutoFillReport> {
        let mut pools = prefetch_pools(gateway, filters, fruit_bonus).await?;

        self.auto_fill(&mut pools)
    }

    /// Searches recipes and adds one of the results to the slot.
    pub async fn suggest_remote<G: NutritionGateway + ?Sized>(
        &mut self,
        gateway: &G,
        key: SlotKey,
        query: &RecipeQuery,
    ) -> mealslot_shared::Result<Placement> {
        let recipes = gateway.search_recipes(query).await?;
        let pool = recipes.iter().map(|r| r.to_meal_input()).collect::<Vec<_>>();

        tracing::info!(%key, query = %query.query, candidates = pool.len(), "suggesting remote recipe");

        self.suggest(key, &pool)
    }

    /// Adds a meal whose calories and macros come from an ingredient lookup.
    pub async fn add_from_ingredients<G: NutritionGateway + ?Sized>(
        &mut self,
        gateway: &G,
        key: SlotKey,
        title: &str,
        ingredients: &str,
    ) -> mealslot_shared::Result<Placement> {
        let facts = gateway.fetch_nutrition(ingredients).await?;

        tracing::info!(%key, title, calories = facts.calories, "adding analyzed meal");

        self.add_meal(key, facts.to_meal_input(title))
    }

    fn snapshot(&self, key: SlotKey) -> mealslot_shared::Result<Option<PlanSnapshot>> {
        let Some(day) = self.horizon().day(key.day) else {
            return Err(mealslot_shared::Error::UnknownDay(key.day));
        };

        Ok(PlanSnapshot::from_entries(
            day.date,
            key.meal_type,
            self.store.entries(key),
        ))
    }

    /// Appends the slot to the saved plans, `None` when it is empty.
    pub async fn save_slot(
        &self,
        pool: &SqlitePool,
        key: SlotKey,
    ) -> mealslot_shared::Result<Option<i64>> {
        let Some(snapshot) = self.snapshot(key)? else {
            return Ok(None);
        };

        let id = insert_plan(pool, &snapshot).await?;
        tracing::info!(%key, id, "slot saved");

        Ok(Some(id))
    }

    /// Saves every non-empty slot of the horizon.
    pub async fn save_all(&self, pool: &SqlitePool) -> mealslot_shared::Result<Vec<i64>> {
        let mut ids = vec![];

        for key in self.horizon().slots() {
            if let Some(id) = self.save_slot(pool, key).await? {
                ids.push(id);
            }
        }

        Ok(ids)
    }
}
