use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use weekfit_core::domain::recipe::{entities::Recipe, ports::RecipeService};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::validators::SuggestRecipesValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SuggestRecipesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    post,
    path = "/suggestions",
    tag = "recipe",
    summary = "Suggest recipes from ingredients",
    description = "Matches the listed ingredients against the recipe catalog. An empty list means nothing matched.",
    responses(
        (status = 200, body = SuggestRecipesResponse)
    ),
    request_body = SuggestRecipesValidator
)]
pub async fn suggest_recipes(
    State(state): State<AppState>,
    RequiredIdentity(_identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<SuggestRecipesValidator>,
) -> Result<Response<SuggestRecipesResponse>, ApiError> {
    let recipes = state.service.suggest_recipes(payload.ingredients).await?;

    Ok(Response::OK(SuggestRecipesResponse { data: recipes }))
}
