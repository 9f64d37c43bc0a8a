use mealslot_shared::Horizon;
use mealslot_shared::mealplan::{Rating, SlotKey};
use std::collections::BTreeMap;

use crate::entry::{EntryEdit, MealEntry, MealInput};

/// Maximum number of entries a slot holds.
pub const SLOT_CAPACITY: usize = 2;

/// What happened to a meal offered to a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Placement {
    Inserted,
    /// The slot already held [`SLOT_CAPACITY`] entries, the meal was dropped.
    SlotFull,
    /// Nothing to pick from, the slot was left untouched.
    EmptyPool,
}

impl Placement {
    pub fn is_inserted(&self) -> bool {
        matches!(self, Placement::Inserted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroSplit {
    pub fn total(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }

    pub fn protein_share(&self) -> f64 {
        self.protein / self.total()
    }

    pub fn carbs_share(&self) -> f64 {
        self.carbs / self.total()
    }

    pub fn fat_share(&self) -> f64 {
        self.fat / self.total()
    }
}

/// In-memory plan of one session: every slot of a horizon and its entries
/// in display order.
#[derive(Debug, Clone)]
pub struct PlanStore {
    horizon: Horizon,
    slots: BTreeMap<SlotKey, Vec<MealEntry>>,
}

impl PlanStore {
    pub fn new(horizon: Horizon) -> Self {
        Self {
            horizon,
            slots: BTreeMap::new(),
        }
    }

    pub fn horizon(&self) -> &Horizon {
        &self.horizon
    }

    fn check(&self, key: SlotKey) -> mealslot_shared::Result<()> {
        if !self.horizon.contains(key.day) {
            return Err(mealslot_shared::Error::UnknownDay(key.day));
        }

        Ok(())
    }

    /// Appends a meal to the slot unless it is already full.
    ///
    /// A full slot is not an error: the meal is dropped and
    /// [`Placement::SlotFull`] is returned.
    pub fn add_meal(
        &mut self,
        key: SlotKey,
        input: MealInput,
    ) -> mealslot_shared::Result<Placement> {
        self.check(key)?;

        let entries = self.slots.entry(key).or_default();
        if entries.len() >= SLOT_CAPACITY {
            tracing::debug!(%key, "slot full, meal dropped");
            return Ok(Placement::SlotFull);
        }

        let entry = MealEntry::from_input(input);
        tracing::debug!(%key, title = %entry.title, calories = entry.calories, "meal added");
        entries.push(entry);

        Ok(Placement::Inserted)
    }

    pub fn clear_slot(&mut self, key: SlotKey) -> mealslot_shared::Result<()> {
        self.check(key)?;
        self.slots.remove(&key);
        tracing::debug!(%key, "slot cleared");

        Ok(())
    }

    /// Updates note, tags and rating of the entry at `index`.
    pub fn edit_entry(
        &mut self,
        key: SlotKey,
        index: usize,
        edit: EntryEdit,
    ) -> mealslot_shared::Result<&MealEntry> {
        self.check(key)?;

        let rating = edit.rating.map(Rating::try_from).transpose()?;
        let len = self.slot_len(key);
        let Some(entry) = self.slots.get_mut(&key).and_then(|e| e.get_mut(index)) else {
            return Err(mealslot_shared::Error::IndexOutOfRange { key, index, len });
        };

        if let Some(note) = edit.note {
            entry.note = note;
        }

        if let Some(tags) = edit.tags {
            entry.tags = tags;
        }

        if let Some(rating) = rating {
            entry.rating = rating;
        }

        Ok(entry)
    }

    pub fn entries(&self, key: SlotKey) -> &[MealEntry] {
        self.slots.get(&key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn slot_len(&self, key: SlotKey) -> usize {
        self.entries(key).len()
    }

    pub fn slot_calories(&self, key: SlotKey) -> f64 {
        self.entries(key).iter().map(|e| e.calories).sum()
    }

    /// Summed macros of a slot, `None` while they add up to nothing.
    pub fn macro_split(&self, key: SlotKey) -> Option<MacroSplit> {
        let split = self
            .entries(key)
            .iter()
            .fold(MacroSplit { protein: 0.0, carbs: 0.0, fat: 0.0 }, |acc, e| MacroSplit {
                protein: acc.protein + e.protein,
                carbs: acc.carbs + e.carbs,
                fat: acc.fat + e.fat,
            });

        (split.total() > 0.0).then_some(split)
    }
}
