use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::{Date, Duration, OffsetDateTime};

use crate::mealplan::{DayIndex, MealType, SlotKey};

pub const WEEK_DAYS: u16 = 7;
pub const MAX_MONTH_DAYS: u16 = 30;

#[derive(
    EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Period {
    #[default]
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub index: DayIndex,
    pub label: String,
    pub date: Date,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Horizon {
    period: Period,
    days: Vec<Day>,
}

pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

fn offset(start: Date, days: u16) -> crate::Result<Date> {
    match start.checked_add(Duration::days(days as i64)) {
        Some(date) => Ok(date),
        None => crate::bail!("horizon starting {start} runs past the last supported date"),
    }
}

impl Horizon {
    /// Seven consecutive days starting at `from`, labeled by weekday name.
    pub fn weekly(from: Date) -> crate::Result<Self> {
        let days = (0..WEEK_DAYS)
            .map(|i| {
                let date = offset(from, i)?;
                Ok(Day {
                    index: DayIndex(i),
                    label: date.weekday().to_string(),
                    date,
                })
            })
            .collect::<crate::Result<Vec<_>>>()?;

        Ok(Self {
            period: Period::Weekly,
            days,
        })
    }

    /// `len` consecutive days starting at `start`, labeled `Day 1`..`Day n`.
    pub fn monthly(start: Date, len: u16) -> crate::Result<Self> {
        if len == 0 || len > MAX_MONTH_DAYS {
            crate::bail!("monthly horizon must cover 1 to {MAX_MONTH_DAYS} days, got {len}");
        }

        let days = (0..len)
            .map(|i| {
                Ok(Day {
                    index: DayIndex(i),
                    label: format!("Day {}", i + 1),
                    date: offset(start, i)?,
                })
            })
            .collect::<crate::Result<Vec<_>>>()?;

        Ok(Self {
            period: Period::Monthly,
            days,
        })
    }

    pub fn for_period(period: Period, from: Date, len: Option<u16>) -> crate::Result<Self> {
        match period {
            Period::Weekly => Self::weekly(from),
            Period::Monthly => Self::monthly(from, len.unwrap_or(MAX_MONTH_DAYS)),
        }
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn day(&self, index: DayIndex) -> Option<&Day> {
        self.days.get(index.0 as usize)
    }

    pub fn contains(&self, index: DayIndex) -> bool {
        (index.0 as usize) < self.days.len()
    }

    /// Every slot of the horizon, day-major, then meal type order.
    pub fn slots(&self) -> impl Iterator<Item = SlotKey> + '_ {
        self.days.iter().flat_map(|day| {
            MealType::VARIANTS.iter().map(move |meal_type| SlotKey {
                day: day.index,
                meal_type: *meal_type,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_weekly_starts_on_given_date() {
        let horizon = Horizon::weekly(date!(2025 - 01 - 22)).unwrap();

        assert_eq!(horizon.len(), 7);
        assert_eq!(horizon.days()[0].date, date!(2025 - 01 - 22));
        assert_eq!(horizon.days()[0].label, "Wednesday");
        assert_eq!(horizon.days()[6].date, date!(2025 - 01 - 28));
        assert_eq!(horizon.days()[6].label, "Tuesday");
    }

    #[test]
    fn test_horizon_past_last_date() {
        assert!(Horizon::weekly(date!(9999 - 12 - 31)).is_err());
        assert!(Horizon::weekly(date!(9999 - 12 - 26)).is_err());
        assert!(Horizon::weekly(date!(9999 - 12 - 25)).is_ok());
        assert!(Horizon::monthly(date!(9999 - 12 - 31), 30).is_err());
        assert!(Horizon::monthly(date!(9999 - 12 - 31), 1).is_ok());
    }

    #[test]
    fn test_monthly_labels_and_bounds() {
        let horizon = Horizon::monthly(date!(2025 - 01 - 30), 30).unwrap();

        assert_eq!(horizon.len(), 30);
        assert_eq!(horizon.days()[0].label, "Day 1");
        assert_eq!(horizon.days()[29].label, "Day 30");
        assert_eq!(horizon.days()[2].date, date!(2025 - 02 - 01));

        assert!(Horizon::monthly(date!(2025 - 01 - 30), 0).is_err());
        assert!(Horizon::monthly(date!(2025 - 01 - 30), 31).is_err());
    }

    #[test]
    fn test_slots_are_day_major() {
        let horizon = Horizon::monthly(date!(2025 - 01 - 01), 2).unwrap();
        let slots = horizon.slots().collect::<Vec<_>>();

        assert_eq!(slots.len(), 6);
        assert_eq!(slots[0], SlotKey::new(0, MealType::Breakfast));
        assert_eq!(slots[2], SlotKey::new(0, MealType::Dinner));
        assert_eq!(slots[3], SlotKey::new(1, MealType::Breakfast));
        assert!(!horizon.contains(DayIndex(2)));
    }
}
