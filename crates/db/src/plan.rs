use mealslot_mealplan::{MealEntry, round1};
use mealslot_shared::mealplan::MealType;
use sea_query::{Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::SqlitePool;
use sqlx::prelude::FromRow;
use time::Date;

use crate::table::Plans;

/// Summed contents of one slot as it is saved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSnapshot {
    pub date: Date,
    pub meal_type: MealType,
    pub items: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl PlanSnapshot {
    /// `None` for an empty slot, there is nothing to save.
    pub fn from_entries(date: Date, meal_type: MealType, entries: &[MealEntry]) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }

        let items = entries
            .iter()
            .map(|e| e.title.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let sum = |f: fn(&MealEntry) -> f64| round1(entries.iter().map(f).sum());

        Some(Self {
            date,
            meal_type,
            items,
            calories: sum(|e| e.calories),
            protein: sum(|e| e.protein),
            carbs: sum(|e| e.carbs),
            fat: sum(|e| e.fat),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct PlanRow {
    pub id: i64,
    pub date: String,
    pub meal_type: String,
    pub items: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Appends a row, saving the same slot twice keeps both rows.
pub async fn insert_plan(
    pool: &SqlitePool,
    snapshot: &PlanSnapshot,
) -> mealslot_shared::Result<i64> {
    let statement = Query::insert()
        .into_table(Plans::Table)
        .columns([
            Plans::Date,
            Plans::MealType,
            Plans::Items,
            Plans::Calories,
            Plans::Protein,
            Plans::Carbs,
            Plans::Fat,
        ])
        .values_panic([
            snapshot.date.to_string().into(),
            snapshot.meal_type.to_string().into(),
            snapshot.items.to_owned().into(),
            snapshot.calories.into(),
            snapshot.protein.into(),
            snapshot.carbs.into(),
            snapshot.fat.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let id = sqlx::query_with(&sql, values)
        .execute(pool)
        .await?
        .last_insert_rowid();

    tracing::debug!(id, date = %snapshot.date, meal_type = %snapshot.meal_type, "plan saved");

    Ok(id)
}

fn select_plans() -> SelectStatement {
    Query::select()
        .columns([
            Plans::Id,
            Plans::Date,
            Plans::MealType,
            Plans::Items,
            Plans::Calories,
            Plans::Protein,
            Plans::Carbs,
            Plans::Fat,
        ])
        .from(Plans::Table)
        .order_by(Plans::Id, Order::Asc)
        .to_owned()
}

/// Every saved row in insertion order.
pub async fn query_plans(pool: &SqlitePool) -> mealslot_shared::Result<Vec<PlanRow>> {
    let (sql, values) = select_plans().build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, PlanRow, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

pub async fn query_plans_by_date(
    pool: &SqlitePool,
    date: Date,
) -> mealslot_shared::Result<Vec<PlanRow>> {
    let statement = select_plans()
        .and_where(Expr::col(Plans::Date).eq(date.to_string()))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, PlanRow, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}
