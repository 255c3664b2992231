use std::future::Future;

use crate::domain::{
    ai::{
        entities::{AiRecipe, GeneratedWeeklyMenu},
        value_objects::{CompletionRequest, GenerateRecipeInput, GenerateWeeklyMenuInput},
    },
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
};

/// Chat completion endpoint. Returns the content of the first choice.
#[cfg_attr(test, mockall::automock)]
pub trait CompletionClient: Send + Sync {
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

pub trait AiService: Send + Sync {
    fn generate_recipe(
        &self,
        identity: Identity,
        input: GenerateRecipeInput,
    ) -> impl Future<Output = Result<AiRecipe, CoreError>> + Send;

    fn generate_weekly_menu(
        &self,
        identity: Identity,
        input: GenerateWeeklyMenuInput,
    ) -> impl Future<Output = Result<GeneratedWeeklyMenu, CoreError>> + Send;
}
