use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use weekfit_core::domain::{
    menu::entities::LoadedMenu, questionnaire::ports::QuestionnaireService,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        questionnaire::validators::SubmitQuestionnaireValidator,
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
pub struct SubmitQuestionnaireResponse {
    pub data: LoadedMenu,
}

#[utoipa::path(
    post,
    path = "/submit",
    tag = "questionnaire",
    summary = "Submit questionnaire",
    description = "Stores the answers as the caller's preferences and generates their weekly menu.",
    responses(
        (status = 201, body = SubmitQuestionnaireResponse),
        (status = 400, description = "Unknown or missing answer")
    ),
    request_body = SubmitQuestionnaireValidator
)]
pub async fn submit_questionnaire(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<SubmitQuestionnaireValidator>,
) -> Result<Response<SubmitQuestionnaireResponse>, ApiError> {
    let menu = state
        .service
        .submit_questionnaire(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SubmitQuestionnaireResponse { data: menu }))
}
