use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

pub const STREAK: &str = "streak";
pub const MEALS_LOGGED: &str = "meals_logged";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Achievement {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub points: i32,
    /// `streak` or `meals_logged`; other kinds are never met.
    pub requirement_type: String,
    pub requirement_value: i32,
}

impl Achievement {
    pub fn is_met(&self, current_streak: i32, meals_logged: u64) -> bool {
        match self.requirement_type.as_str() {
            STREAK => current_streak >= self.requirement_value,
            MEALS_LOGGED => meals_logged >= self.requirement_value.max(0) as u64,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserAchievement {
    pub id: Uuid,
    pub user_id: Uuid,
    pub achievement_id: Uuid,
    pub unlocked_at: DateTime<Utc>,
}

impl UserAchievement {
    pub fn new(user_id: Uuid, achievement_id: Uuid) -> Self {
        Self {
            id: generate_uuid_v7(),
            user_id,
            achievement_id,
            unlocked_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AchievementStatus {
    #[serde(flatten)]
    pub achievement: Achievement,
    pub unlocked: bool,
    pub unlocked_at: Option<DateTime<Utc>>,
}

fn achievement(
    id: u128,
    name: &str,
    description: &str,
    icon: &str,
    points: i32,
    (requirement_type, requirement_value): (&str, i32),
) -> Achievement {
    Achievement {
        id: Uuid::from_u128(id),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        points,
        requirement_type: requirement_type.to_string(),
        requirement_value,
    }
}

/// Built-in catalog, also seeded by the migrations with the same ids.
pub fn default_catalog() -> Vec<Achievement> {
    vec![
        achievement(1, "Primeiro Passo", "Use o WeekFit pela primeira vez", "🌱", 10, (STREAK, 1)),
        achievement(2, "Semana de Fogo", "Mantenha uma sequência de 7 dias", "🔥", 100, (STREAK, 7)),
        achievement(
            3,
            "Mestre da Consistência",
            "Mantenha uma sequência de 30 dias",
            "🏆",
            500,
            (STREAK, 30),
        ),
        achievement(4, "Primeira Refeição", "Registre sua primeira refeição", "🍽️", 10, (MEALS_LOGGED, 1)),
        achievement(5, "Chef Dedicado", "Registre 20 refeições", "👨‍🍳", 150, (MEALS_LOGGED, 20)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirements() {
        let catalog = default_catalog();
        assert!(catalog[0].is_met(1, 0));
        assert!(!catalog[1].is_met(6, 100));
        assert!(catalog[1].is_met(7, 0));
        assert!(!catalog[4].is_met(30, 19));
        assert!(catalog[4].is_met(0, 20));

        let mut unknown = catalog[0].clone();
        unknown.requirement_type = "recipes_shared".to_string();
        assert!(!unknown.is_met(100, 100));
    }

    #[test]
    fn test_status_flattens_achievement() {
        let status = AchievementStatus {
            achievement: default_catalog().remove(1),
            unlocked: false,
            unlocked_at: None,
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["name"], "Semana de Fogo");
        assert_eq!(json["unlocked"], false);
    }
}
