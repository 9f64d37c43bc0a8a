use mealslot_mealplan::{EntryEdit, MealInput, Placement};
use mealslot_shared::Error;
use mealslot_shared::mealplan::{MealType, SlotKey, Tag};
use std::collections::BTreeSet;

mod helpers;

#[test]
fn test_third_meal_is_dropped() -> anyhow::Result<()> {
    let mut store = helpers::weekly_store();
    let key = SlotKey::new(0, MealType::Breakfast);

    assert_eq!(
        store.add_meal(key, MealInput::new("oatmeal", 350.0))?,
        Placement::Inserted
    );
    assert_eq!(
        store.add_meal(key, MealInput::new("yogurt", 200.0))?,
        Placement::Inserted
    );

    let placement = store.add_meal(key, MealInput::new("pancakes", 500.0))?;
    assert_eq!(placement, Placement::SlotFull);
    assert!(!placement.is_inserted());
    assert_eq!(store.slot_len(key), 2);
    assert_eq!(store.entries(key)[0].title, "Oatmeal");
    assert_eq!(store.entries(key)[1].title, "Yogurt");

    Ok(())
}

#[test]
fn test_protein_floor_on_insert() -> anyhow::Result<()> {
    let mut store = helpers::weekly_store();
    let low = SlotKey::new(1, MealType::Lunch);
    let high = SlotKey::new(1, MealType::Dinner);

    let _ = store.add_meal(
        low,
        MealInput::new("side salad", 120.0).with_macros(3.0, 5.0, 10.0),
    )?;
    let _ = store.add_meal(
        high,
        MealInput::new("salmon", 420.0).with_macros(34.0, 22.0, 0.0),
    )?;

    assert_eq!(store.entries(low)[0].protein, 8.0);
    assert_eq!(store.entries(low)[0].calories, 140.0);
    assert_eq!(store.entries(high)[0].protein, 34.0);
    assert_eq!(store.entries(high)[0].calories, 420.0);

    Ok(())
}

#[test]
fn test_clear_slot_removes_its_totals() -> anyhow::Result<()> {
    let mut store = helpers::weekly_store();
    let breakfast = SlotKey::new(2, MealType::Breakfast);
    let dinner = SlotKey::new(2, MealType::Dinner);

    let _ = store.add_meal(breakfast, MealInput::new("eggs", 300.0))?;
    let _ = store.add_meal(breakfast, MealInput::new("toast", 200.0))?;
    let _ = store.add_meal(dinner, MealInput::new("curry", 600.0))?;

    let totals = store.weekly_totals();
    assert_eq!(totals.days[2].calories, 1100.0);
    assert_eq!(totals.days[2].entries, 3);

    store.clear_slot(breakfast)?;
    store.clear_slot(breakfast)?;

    let totals = store.weekly_totals();
    assert_eq!(totals.days[2].calories, 600.0);
    assert_eq!(totals.days[2].entries, 1);
    assert_eq!(totals.calories, 600.0);
    assert_eq!(totals.entries, 1);
    assert!(store.entries(breakfast).is_empty());

    Ok(())
}

#[test]
fn test_edit_entry_bounds_and_fields() -> anyhow::Result<()> {
    let mut store = helpers::weekly_store();
    let key = SlotKey::new(4, MealType::Lunch);
    let _ = store.add_meal(key, MealInput::new("falafel wrap", 380.0))?;
    let before = store.entries(key)[0].clone();

    let err = store
        .edit_entry(key, 1, EntryEdit::note("extra hummus"))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::IndexOutOfRange {
            index: 1,
            len: 1,
            ..
        }
    ));

    let tags = BTreeSet::from([Tag::Vegan, Tag::QuickPrep]);
    let entry = store.edit_entry(
        key,
        0,
        EntryEdit {
            note: Some("extra hummus".to_owned()),
            tags: Some(tags.clone()),
            rating: Some(4),
        },
    )?;

    assert_eq!(entry.note, "extra hummus");
    assert_eq!(entry.tags, tags);
    assert_eq!(entry.rating.value(), 4);
    assert_eq!(entry.title, before.title);
    assert_eq!(entry.calories, before.calories);
    assert_eq!(entry.protein, before.protein);
    assert_eq!(entry.fat, before.fat);
    assert_eq!(entry.carbs, before.carbs);

    Ok(())
}

#[test]
fn test_edit_does_not_reapply_floor() -> anyhow::Result<()> {
    let mut store = helpers::weekly_store();
    let key = SlotKey::new(0, MealType::Dinner);
    let _ = store.add_meal(
        key,
        MealInput::new("broth", 60.0).with_macros(2.0, 1.0, 3.0),
    )?;

    store.edit_entry(key, 0, EntryEdit::note("light"))?;
    store.edit_entry(key, 0, EntryEdit::note("lighter"))?;

    assert_eq!(store.entries(key)[0].protein, 7.0);
    assert_eq!(store.entries(key)[0].calories, 80.0);

    Ok(())
}

#[test]
fn test_invalid_rating_leaves_entry_untouched() -> anyhow::Result<()> {
    let mut store = helpers::weekly_store();
    let key = SlotKey::new(0, MealType::Lunch);
    let _ = store.add_meal(key, MealInput::new("ramen", 450.0))?;

    let err = store
        .edit_entry(
            key,
            0,
            EntryEdit {
                note: Some("too salty".to_owned()),
                tags: None,
                rating: Some(9),
            },
        )
        .unwrap_err();

    assert!(matches!(err, Error::InvalidRating(9)));
    assert!(store.entries(key)[0].note.is_empty());
    assert_eq!(store.entries(key)[0].rating.value(), 1);

    Ok(())
}

#[test]
fn test_day_outside_horizon_is_rejected() {
    let mut store = helpers::store_with_days(3);
    let key = SlotKey::new(3, MealType::Breakfast);

    assert!(matches!(
        store.add_meal(key, MealInput::new("toast", 200.0)),
        Err(Error::UnknownDay(_))
    ));
    assert!(store.clear_slot(key).is_err());
}

#[test]
fn test_macro_split() -> anyhow::Result<()> {
    let mut store = helpers::weekly_store();
    let key = SlotKey::new(6, MealType::Dinner);
    assert!(store.macro_split(key).is_none());

    let _ = store.add_meal(
        key,
        MealInput::new("steak", 500.0).with_macros(40.0, 30.0, 10.0),
    )?;
    let _ = store.add_meal(
        key,
        MealInput::new("potatoes", 300.0).with_macros(10.0, 0.0, 10.0),
    )?;

    let split = store.macro_split(key).unwrap();
    assert_eq!(split.protein, 50.0);
    assert_eq!(split.carbs, 20.0);
    assert_eq!(split.fat, 30.0);
    assert_eq!(split.protein_share(), 0.5);
    assert_eq!(store.slot_calories(key), 800.0);

    Ok(())
}
