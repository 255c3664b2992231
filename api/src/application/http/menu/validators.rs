use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};
use weekfit_core::domain::menu::entities::{DayOfWeek, MealSlot, MenuMeals};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegenerateMealValidator {
    pub day: DayOfWeek,
    pub slot: MealSlot,
}

fn has_named_meals(meals: &MenuMeals) -> Result<(), ValidationError> {
    let names: Vec<&String> = meals.values().flat_map(BTreeMap::values).collect();
    if names.is_empty() || names.iter().any(|name| name.trim().is_empty()) {
        return Err(ValidationError::new("meals").with_message("every planned meal needs a name".into()));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveMenuValidator {
    /// Defaults to the Monday of the current week.
    #[serde(default)]
    pub week_start: Option<NaiveDate>,

    #[validate(custom(function = "has_named_meals"))]
    #[schema(value_type = Object)]
    pub meals: MenuMeals,

    /// Questionnaire cooking time the recipes are sized for.
    #[serde(default)]
    pub cooking_time: Option<String>,
}
