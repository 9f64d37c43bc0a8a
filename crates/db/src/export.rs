use sqlx::SqlitePool;
use std::borrow::Cow;
use std::io::Write;

use crate::{PlanRow, query_plans};

pub const DEFAULT_EXPORT_FILE: &str = "my_meal_plans.csv";

pub const EXPORT_HEADER: [&str; 8] = [
    "id",
    "date",
    "meal_type",
    "items",
    "calories",
    "protein",
    "carbs",
    "fat",
];

fn field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

fn write_record<W: Write>(out: &mut W, fields: &[&str]) -> std::io::Result<()> {
    let line = fields.iter().map(|f| field(f)).collect::<Vec<_>>().join(",");
    write!(out, "{line}\r\n")
}

/// Writes rows as comma-separated text, header first.
pub fn write_csv<W: Write>(rows: &[PlanRow], mut out: W) -> mealslot_shared::Result<()> {
    write_record(&mut out, &EXPORT_HEADER)?;

    for row in rows {
        let id = row.id.to_string();
        let calories = row.calories.to_string();
        let protein = row.protein.to_string();
        let carbs = row.carbs.to_string();
        let fat = row.fat.to_string();

        write_record(
            &mut out,
            &[
                &id,
                &row.date,
                &row.meal_type,
                &row.items,
                &calories,
                &protein,
                &carbs,
                &fat,
            ],
        )?;
    }

    out.flush()?;

    Ok(())
}

/// Exports every saved row, returns how many were written.
/// `open` runs only once the rows are loaded, so a failed query leaves the target untouched.
pub async fn export_plans<W, F>(pool: &SqlitePool, open: F) -> mealslot_shared::Result<usize>
where
    W: Write,
    F: FnOnce() -> std::io::Result<W>,
{
    let rows = query_plans(pool).await?;
    write_csv(&rows, open()?)?;

    tracing::info!(rows = rows.len(), "plans exported");

    Ok(rows.len())
}
