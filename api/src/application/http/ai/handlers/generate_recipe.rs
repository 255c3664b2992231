use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use weekfit_core::domain::ai::{entities::AiRecipe, ports::AiService};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        ai::validators::GenerateRecipeValidator,
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
pub struct GenerateRecipeResponse {
    pub data: AiRecipe,
}

#[utoipa::path(
    post,
    path = "/recipe",
    tag = "ai",
    summary = "Generate a recipe",
    description = "Asks the language model for one recipe matching the given preferences.",
    responses(
        (status = 200, body = GenerateRecipeResponse),
        (status = 402, description = "The AI gateway has no credits left"),
        (status = 429, description = "The AI gateway is rate limiting"),
        (status = 500, description = "The model reply could not be used")
    ),
    request_body = GenerateRecipeValidator
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<GenerateRecipeValidator>,
) -> Result<Response<GenerateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .generate_recipe(identity, payload.into())
        .await?;

    Ok(Response::OK(GenerateRecipeResponse { data: recipe }))
}
