use crate::{
    domain::achievement::entities::{Achievement, UserAchievement},
    entity::{achievements, user_achievements},
};

impl From<achievements::Model> for Achievement {
    fn from(model: achievements::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            icon: model.icon,
            points: model.points,
            requirement_type: model.requirement_type,
            requirement_value: model.requirement_value,
        }
    }
}

impl From<user_achievements::Model> for UserAchievement {
    fn from(model: user_achievements::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            achievement_id: model.achievement_id,
            unlocked_at: model.unlocked_at.to_utc(),
        }
    }
}
