use clap::Args;
use mealslot_gateway::{CARBS_CODE, FAT_CODE, NutritionGateway, PROTEIN_CODE, RecipeQuery};
use mealslot_shared::recipe::{CuisineType, Diet};

#[derive(Args)]
pub struct SearchArgs {
    query: String,

    #[arg(long, default_value_t = CuisineType::Random)]
    cuisine: CuisineType,

    /// Diet filter, repeatable
    #[arg(long = "diet")]
    diets: Vec<Diet>,
}

#[tracing::instrument(skip_all, fields(query = %args.query))]
pub async fn search(config: mealslot::Config, args: SearchArgs) -> anyhow::Result<()> {
    let gateway = super::gateway(&config)?;
    let query = RecipeQuery::new(args.query)
        .cuisine(args.cuisine)
        .diets(args.diets)
        .number(config.gateway.page_size);

    let recipes = gateway.search_recipes(&query).await?;

    if recipes.is_empty() {
        println!("No recipes found");
        return Ok(());
    }

    for recipe in recipes {
        let input = recipe.to_meal_input();
        println!("{} ({:.0} kcal)", recipe.title, input.calories);

        if let Some(url) = recipe.source_url {
            println!("  {url}");
        }
    }

    Ok(())
}

#[tracing::instrument(skip_all)]
pub async fn nutrition(config: mealslot::Config, ingredients: String) -> anyhow::Result<()> {
    let gateway = super::gateway(&config)?;
    let facts = gateway.fetch_nutrition(&ingredients).await?;

    println!("Calories: {:.0} kcal", facts.calories);

    for (label, code) in [
        ("Protein", PROTEIN_CODE),
        ("Fat", FAT_CODE),
        ("Carbs", CARBS_CODE),
    ] {
        match facts.nutrients.get(code) {
            Some(n) => println!("{label}: {:.1} {}", n.quantity, n.unit),
            None => println!("{label}: unknown"),
        }
    }

    Ok(())
}
