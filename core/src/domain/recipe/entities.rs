use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: String,
    pub meal_name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Minutes.
    pub prep_time: u32,
    /// Minutes.
    pub cook_time: u32,
    pub servings: u32,
}

impl Recipe {
    pub fn total_time(&self) -> u32 {
        self.prep_time + self.cook_time
    }
}
