mod plans_create_date_meal_type_idx;
mod plans_create_table;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "main",
    "m0_1",
    vec_box![],
    vec_box![
        plans_create_table::Operation,
        plans_create_date_meal_type_idx::Operation,
    ]
);
