use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, recipe::entities::Recipe};

pub trait RecipeService: Send + Sync {
    fn suggest_recipes(
        &self,
        ingredients: String,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;
}
