use crate::{
    domain::profile::entities::{Level, Profile},
    entity::profiles::Model as ProfileModel,
};

impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        // Unknown level names are recomputed from the points.
        let level = model
            .level
            .parse()
            .unwrap_or_else(|_| Level::for_points(model.points));

        Profile {
            id: model.id,
            email: model.email,
            full_name: model.full_name,
            avatar_url: model.avatar_url,
            level,
            points: model.points,
            current_streak: model.current_streak,
            max_streak: model.max_streak,
            last_active_date: model.last_active_date,
            preferences: model.preferences,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_unknown_level_is_recomputed() {
        let now = Utc::now().fixed_offset();
        let model = ProfileModel {
            id: Uuid::new_v4(),
            email: None,
            full_name: Some("Ana".to_string()),
            avatar_url: None,
            level: "Legend".to_string(),
            points: 1600,
            current_streak: 2,
            max_streak: 4,
            last_active_date: None,
            preferences: serde_json::json!({}),
            created_at: now,
            updated_at: now,
        };

        let profile = Profile::from(model);
        assert_eq!(profile.level, Level::Gold);
        assert_eq!(profile.full_name.as_deref(), Some("Ana"));
    }
}
