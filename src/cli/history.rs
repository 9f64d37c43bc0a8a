use mealslot_db::{DEFAULT_EXPORT_FILE, export_plans, query_plans};
use std::fs::File;
use std::io::BufWriter;

pub async fn history(config: mealslot::Config) -> anyhow::Result<()> {
    let pool = mealslot::open_database(&config.database.url).await?;
    let rows = query_plans(&pool).await?;

    if rows.is_empty() {
        println!("No saved plans");
        return Ok(());
    }

    for row in rows {
        println!(
            "#{} {} {:<9} {} | {:.0} kcal | P {:.1}g C {:.1}g F {:.1}g",
            row.id, row.date, row.meal_type, row.items, row.calories, row.protein, row.carbs, row.fat
        );
    }

    Ok(())
}

/// `-` writes to stdout.
pub async fn export(config: mealslot::Config, output: Option<String>) -> anyhow::Result<()> {
    let pool = mealslot::open_database(&config.database.url).await?;
    let output = output.unwrap_or_else(|| DEFAULT_EXPORT_FILE.to_owned());

    if output == "-" {
        export_plans(&pool, || Ok(std::io::stdout().lock())).await?;
        return Ok(());
    }

    let written = export_plans(&pool, || File::create(&output).map(BufWriter::new)).await?;
    tracing::info!("Exported {written} plans to {output}");

    Ok(())
}
