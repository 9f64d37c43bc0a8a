use mealslot_mealplan::PlanStore;
use mealslot_shared::Horizon;
use rand::SeedableRng;
use rand::rngs::StdRng;
use time::macros::date;

pub fn store_with_days(days: u16) -> PlanStore {
    let horizon = Horizon::monthly(date!(2025 - 03 - 03), days).unwrap();
    PlanStore::new(horizon)
}

pub fn weekly_store() -> PlanStore {
    PlanStore::new(Horizon::weekly(date!(2025 - 03 - 03)).unwrap())
}

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}
