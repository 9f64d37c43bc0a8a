use mealslot_mealplan::{
    AutoFillReport, CatalogPools, MealInput, Placement, PoolProvider, StaticPools,
};
use mealslot_shared::mealplan::{MealType, SlotKey};
use rand::Rng;

mod helpers;

#[test]
fn test_auto_fill_three_days_single_pool() -> anyhow::Result<()> {
    let mut store = helpers::store_with_days(3);
    let mut pools = StaticPools::uniform(vec![MealInput::new("A", 300.0)]);
    let mut rng = helpers::rng();

    let report = store.auto_fill(&mut pools, &mut rng)?;

    assert_eq!(
        report,
        AutoFillReport {
            inserted: 9,
            slot_full: 0,
            empty_pool: 0,
        }
    );

    for key in store.horizon().slots().collect::<Vec<_>>() {
        let entries = store.entries(key);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "A");
        assert_eq!(entries[0].calories, 300.0);
        assert_eq!(entries[0].protein, 18.8);
    }

    let totals = store.weekly_totals();
    assert_eq!(totals.entries, 9);
    assert_eq!(totals.calories, 2700.0);
    assert_eq!(totals.days.len(), 3);
    assert!(totals.days.iter().all(|d| d.calories == 900.0 && d.entries == 3));

    Ok(())
}

#[test]
fn test_bonus_pool_fills_second_place_then_drops() -> anyhow::Result<()> {
    let mut store = helpers::store_with_days(1);
    let mut pools = StaticPools::uniform(vec![MealInput::new("porridge", 350.0)])
        .with_bonus(vec![MealInput::new("fruit bowl", 180.0)]);
    let mut rng = helpers::rng();

    let first = store.auto_fill(&mut pools, &mut rng)?;
    assert_eq!(first.inserted, 6);
    assert_eq!(first.slot_full, 0);

    let key = SlotKey::new(0, MealType::Breakfast);
    assert_eq!(store.entries(key)[0].title, "Porridge");
    assert_eq!(store.entries(key)[1].title, "Fruit Bowl");

    let second = store.auto_fill(&mut pools, &mut rng)?;
    assert_eq!(second.inserted, 0);
    assert_eq!(second.slot_full, 6);
    assert_eq!(store.weekly_totals().entries, 6);

    Ok(())
}

#[test]
fn test_empty_pool_leaves_slots_empty() -> anyhow::Result<()> {
    let mut store = helpers::store_with_days(2);
    let mut rng = helpers::rng();
    let key = SlotKey::new(1, MealType::Lunch);

    assert_eq!(
        store.suggest_random(key, &[], &mut rng)?,
        Placement::EmptyPool
    );

    let mut pools = StaticPools::default();
    let report = store.auto_fill(&mut pools, &mut rng)?;

    assert_eq!(report.empty_pool, 6);
    assert_eq!(store.weekly_totals().entries, 0);

    Ok(())
}

#[test]
fn test_suggest_random_is_seeded() -> anyhow::Result<()> {
    let pool = ["Ramen", "Onigiri", "Tempura Vegetables", "Sushi Rolls"]
        .into_iter()
        .map(|title| MealInput::new(title, 400.0))
        .collect::<Vec<_>>();
    let key = SlotKey::new(0, MealType::Dinner);

    let mut first = helpers::store_with_days(1);
    let mut second = helpers::store_with_days(1);
    let _ = first.suggest_random(key, &pool, &mut helpers::rng())?;
    let _ = second.suggest_random(key, &pool, &mut helpers::rng())?;

    assert_eq!(first.entries(key), second.entries(key));

    Ok(())
}

struct Recording {
    calls: Vec<SlotKey>,
}

impl PoolProvider for Recording {
    fn meal_pool<R: Rng + ?Sized>(&mut self, key: SlotKey, _rng: &mut R) -> Vec<MealInput> {
        self.calls.push(key);
        vec![MealInput::new("stew", 500.0)]
    }
}

#[test]
fn test_auto_fill_visits_days_then_meal_types() -> anyhow::Result<()> {
    let mut store = helpers::store_with_days(2);
    let mut provider = Recording { calls: vec![] };

    let _ = store.auto_fill(&mut provider, &mut helpers::rng())?;

    assert_eq!(
        provider.calls,
        vec![
            SlotKey::new(0, MealType::Breakfast),
            SlotKey::new(0, MealType::Lunch),
            SlotKey::new(0, MealType::Dinner),
            SlotKey::new(1, MealType::Breakfast),
            SlotKey::new(1, MealType::Lunch),
            SlotKey::new(1, MealType::Dinner),
        ]
    );

    Ok(())
}

#[test]
fn test_catalog_week_with_fruit_bonus() -> anyhow::Result<()> {
    let mut store = helpers::weekly_store();
    let mut rng = helpers::rng();

    let report = store.auto_fill(&mut CatalogPools::new(true), &mut rng)?;

    assert_eq!(report.inserted, 42);
    let totals = store.weekly_totals();
    assert_eq!(totals.entries, 42);
    assert!(totals.calories >= 42.0 * 280.0);
    assert!(totals.calories <= 42.0 * 480.0);

    Ok(())
}
