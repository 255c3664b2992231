use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use weekfit_core::domain::progress::value_objects::RecordProgressInput;

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordProgressValidator {
    /// Defaults to today.
    pub recorded_date: Option<NaiveDate>,

    /// Kilograms.
    #[validate(range(exclusive_min = 0.0, max = 500.0))]
    pub weight: Option<f64>,

    #[validate(range(exclusive_min = 0.0, max = 100.0))]
    pub body_fat_percentage: Option<f64>,

    /// Kilograms.
    #[validate(range(exclusive_min = 0.0, max = 500.0))]
    pub muscle_mass: Option<f64>,

    /// Centimeters.
    #[validate(range(exclusive_min = 0.0, max = 300.0))]
    pub waist_circumference: Option<f64>,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

impl From<RecordProgressValidator> for RecordProgressInput {
    fn from(payload: RecordProgressValidator) -> Self {
        RecordProgressInput {
            recorded_date: payload.recorded_date,
            weight: payload.weight,
            body_fat_percentage: payload.body_fat_percentage,
            muscle_mass: payload.muscle_mass,
            waist_circumference: payload.waist_circumference,
            notes: payload.notes,
        }
    }
}
