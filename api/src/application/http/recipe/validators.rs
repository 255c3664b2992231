use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SuggestRecipesValidator {
    /// Free text, ingredients separated by commas or new lines.
    #[validate(length(min = 1, max = 2000, message = "list at least one ingredient"))]
    pub ingredients: String,
}
