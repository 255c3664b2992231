use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use weekfit_core::domain::questionnaire::QuestionnaireAnswers;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitQuestionnaireValidator {
    #[validate(length(min = 1, message = "goal is required"))]
    pub goal: String,

    #[validate(length(min = 1, message = "pick at least one restriction or 'nenhuma'"))]
    pub restrictions: Vec<String>,

    #[validate(length(min = 1, message = "budget is required"))]
    pub budget: String,

    #[validate(length(min = 1, message = "cooking_time is required"))]
    pub cooking_time: String,

    #[validate(length(min = 1, message = "experience is required"))]
    pub experience: String,

    #[validate(length(min = 1, message = "pick at least one cuisine"))]
    pub cuisines: Vec<String>,

    #[validate(length(min = 1, message = "pick at least one meal"))]
    pub meals: Vec<String>,
}

impl From<SubmitQuestionnaireValidator> for QuestionnaireAnswers {
    fn from(payload: SubmitQuestionnaireValidator) -> Self {
        QuestionnaireAnswers {
            goal: payload.goal,
            restrictions: payload.restrictions,
            budget: payload.budget,
            cooking_time: payload.cooking_time,
            experience: payload.experience,
            cuisines: payload.cuisines,
            meals: payload.meals,
        }
    }
}
