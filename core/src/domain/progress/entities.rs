use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    progress::value_objects::RecordProgressInput,
};

pub const HISTORY_LENGTH: u64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProgressEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recorded_date: NaiveDate,
    /// Kilograms.
    pub weight: Option<f64>,
    pub body_fat_percentage: Option<f64>,
    /// Kilograms.
    pub muscle_mass: Option<f64>,
    /// Centimetres.
    pub waist_circumference: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

fn check_measurement(name: &str, value: Option<f64>) -> Result<(), CoreError> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => {
            Err(CoreError::Invalid(format!("{} must be a positive number", name)))
        }
        _ => Ok(()),
    }
}

impl ProgressEntry {
    pub fn new(user_id: Uuid, input: RecordProgressInput, today: NaiveDate) -> Result<Self, CoreError> {
        let measurements = [
            input.weight,
            input.body_fat_percentage,
            input.muscle_mass,
            input.waist_circumference,
        ];
        if measurements.iter().all(Option::is_none) {
            return Err(CoreError::Invalid(
                "at least one measurement is required".to_string(),
            ));
        }

        check_measurement("weight", input.weight)?;
        check_measurement("body_fat_percentage", input.body_fat_percentage)?;
        check_measurement("muscle_mass", input.muscle_mass)?;
        check_measurement("waist_circumference", input.waist_circumference)?;
        if input.body_fat_percentage.is_some_and(|v| v > 100.0) {
            return Err(CoreError::Invalid(
                "body_fat_percentage must not exceed 100".to_string(),
            ));
        }

        Ok(Self {
            id: generate_uuid_v7(),
            user_id,
            recorded_date: input.recorded_date.unwrap_or(today),
            weight: input.weight,
            body_fat_percentage: input.body_fat_percentage,
            muscle_mass: input.muscle_mass,
            waist_circumference: input.waist_circumference,
            notes: input
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 20).unwrap()
    }

    #[test]
    fn test_requires_a_measurement() {
        let input = RecordProgressInput {
            notes: Some("Me sentindo bem".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            ProgressEntry::new(Uuid::new_v4(), input, today()),
            Err(CoreError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_values() {
        for weight in [0.0, -72.0, f64::NAN] {
            let input = RecordProgressInput {
                weight: Some(weight),
                ..Default::default()
            };
            assert!(ProgressEntry::new(Uuid::new_v4(), input, today()).is_err());
        }

        let input = RecordProgressInput {
            body_fat_percentage: Some(120.0),
            ..Default::default()
        };
        assert!(ProgressEntry::new(Uuid::new_v4(), input, today()).is_err());
    }

    #[test]
    fn test_defaults_date_and_trims_notes() {
        let input = RecordProgressInput {
            weight: Some(75.5),
            notes: Some("   ".to_string()),
            ..Default::default()
        };
        let entry = ProgressEntry::new(Uuid::new_v4(), input, today()).unwrap();
        assert_eq!(entry.recorded_date, today());
        assert_eq!(entry.weight, Some(75.5));
        assert_eq!(entry.notes, None);
    }
}
