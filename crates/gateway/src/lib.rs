mod client;
mod pools;
mod types;

pub use client::*;
pub use pools::*;
pub use types::*;

/// Remote nutrition and recipe lookups.
///
/// Failures of either call surface as [`mealslot_shared::Error::Upstream`].
#[async_trait::async_trait]
pub trait NutritionGateway: Send + Sync {
    /// Nutrition facts of a comma-separated ingredient list such as
    /// `"1 apple, 2 eggs"`.
    async fn fetch_nutrition(&self, ingredients: &str) -> mealslot_shared::Result<NutritionFacts>;

    async fn search_recipes(
        &self,
        query: &RecipeQuery,
    ) -> mealslot_shared::Result<Vec<RecipeSummary>>;
}
