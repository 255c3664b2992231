use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use weekfit_core::domain::questionnaire::{Question, ports::QuestionnaireService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetQuestionsResponse {
    pub data: Vec<Question>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "questionnaire",
    summary = "Questionnaire steps",
    description = "Returns the ordered questionnaire steps with their options.",
    responses(
        (status = 200, body = GetQuestionsResponse)
    )
)]
pub async fn get_questions(
    State(state): State<AppState>,
) -> Result<Response<GetQuestionsResponse>, ApiError> {
    Ok(Response::OK(GetQuestionsResponse {
        data: state.service.get_questions(),
    }))
}
