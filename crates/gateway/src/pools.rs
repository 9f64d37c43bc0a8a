use mealslot_mealplan::{FRUIT_POOL, MealInput, StaticPools};
use mealslot_shared::Result;
use mealslot_shared::mealplan::MealType;
use strum::VariantArray;

use crate::{NutritionGateway, RecipeQuery};

async fn pool<G: NutritionGateway + ?Sized>(
    gateway: &G,
    filters: &RecipeQuery,
    query: String,
) -> Result<Vec<MealInput>> {
    let query = RecipeQuery {
        query,
        ..filters.clone()
    };

    let recipes = gateway.search_recipes(&query).await?;

    Ok(recipes.iter().map(|r| r.to_meal_input()).collect())
}

/// Searches one recipe pool per meal type, and a fruit pool when
/// `fruit_bonus` is set, using the cuisine, diets and page size of `filters`.
///
/// Every search completes before anything is returned, so a failure leaves no
/// half-built pools behind.
pub async fn prefetch_pools<G: NutritionGateway + ?Sized>(
    gateway: &G,
    filters: &RecipeQuery,
    fruit_bonus: bool,
) -> Result<StaticPools> {
    let mut pools = StaticPools::default();

    for meal_type in MealType::VARIANTS {
        let meals = pool(gateway, filters, meal_type.to_string().to_lowercase()).await?;
        tracing::debug!(%meal_type, candidates = meals.len(), "pool prefetched");
        pools.meals.insert(*meal_type, meals);
    }

    if fruit_bonus {
        pools.bonus = Some(pool(gateway, filters, FRUIT_POOL.to_owned()).await?);
    }

    Ok(pools)
}
