use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use weekfit_core::domain::ai::value_objects::{GenerateRecipeInput, GenerateWeeklyMenuInput};

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateRecipeValidator {
    #[validate(length(max = 1000))]
    pub preferences: Option<String>,

    #[validate(length(max = 100))]
    pub meal_type: Option<String>,

    #[validate(length(max = 100))]
    pub diet_goal: Option<String>,
}

impl From<GenerateRecipeValidator> for GenerateRecipeInput {
    fn from(payload: GenerateRecipeValidator) -> Self {
        GenerateRecipeInput {
            preferences: payload.preferences,
            meal_type: payload.meal_type,
            diet_goal: payload.diet_goal,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateWeeklyMenuValidator {
    #[validate(length(max = 1000))]
    pub preferences: Option<String>,

    #[validate(length(max = 100))]
    pub diet_goal: Option<String>,

    #[validate(length(max = 100))]
    pub budget: Option<String>,

    #[validate(length(max = 100))]
    pub time_available: Option<String>,

    /// Also store the generated menu as the caller's current one.
    #[serde(default)]
    pub save: bool,
}

impl From<GenerateWeeklyMenuValidator> for GenerateWeeklyMenuInput {
    fn from(payload: GenerateWeeklyMenuValidator) -> Self {
        GenerateWeeklyMenuInput {
            preferences: payload.preferences,
            diet_goal: payload.diet_goal,
            budget: payload.budget,
            time_available: payload.time_available,
            save: payload.save,
        }
    }
}
