use sea_orm::ActiveValue::Set;

use crate::{domain::progress::entities::ProgressEntry, entity::user_progress};

impl From<user_progress::Model> for ProgressEntry {
    fn from(model: user_progress::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            recorded_date: model.recorded_date,
            weight: model.weight,
            body_fat_percentage: model.body_fat_percentage,
            muscle_mass: model.muscle_mass,
            waist_circumference: model.waist_circumference,
            notes: model.notes,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<ProgressEntry> for user_progress::ActiveModel {
    fn from(entry: ProgressEntry) -> Self {
        Self {
            id: Set(entry.id),
            user_id: Set(entry.user_id),
            recorded_date: Set(entry.recorded_date),
            weight: Set(entry.weight),
            body_fat_percentage: Set(entry.body_fat_percentage),
            muscle_mass: Set(entry.muscle_mass),
            waist_circumference: Set(entry.waist_circumference),
            notes: Set(entry.notes),
            created_at: Set(entry.created_at.fixed_offset()),
        }
    }
}
