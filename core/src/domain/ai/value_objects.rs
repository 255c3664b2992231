use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct GenerateRecipeInput {
    pub preferences: Option<String>,
    pub meal_type: Option<String>,
    pub diet_goal: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerateWeeklyMenuInput {
    pub preferences: Option<String>,
    pub diet_goal: Option<String>,
    pub budget: Option<String>,
    pub time_available: Option<String>,
    #[serde(skip)]
    pub save: bool,
}

/// One chat completion call: a system and a user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
}
