use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    questionnaire::QuestionnaireAnswers,
};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum Level {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl Level {
    pub fn for_points(points: i32) -> Self {
        match points {
            p if p < 500 => Level::Bronze,
            p if p < 1500 => Level::Silver,
            p if p < 3000 => Level::Gold,
            p if p < 5000 => Level::Platinum,
            _ => Level::Diamond,
        }
    }

    /// Points needed to leave this level.
    pub fn next_level_points(&self) -> i32 {
        match self {
            Level::Bronze => 500,
            Level::Silver => 1500,
            Level::Gold => 3000,
            Level::Platinum => 5000,
            Level::Diamond => 10000,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Bronze => "Bronze",
            Level::Silver => "Silver",
            Level::Gold => "Gold",
            Level::Platinum => "Platinum",
            Level::Diamond => "Diamond",
        }
    }
}

impl std::str::FromStr for Level {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bronze" => Ok(Level::Bronze),
            "Silver" => Ok(Level::Silver),
            "Gold" => Ok(Level::Gold),
            "Platinum" => Ok(Level::Platinum),
            "Diamond" => Ok(Level::Diamond),
            other => Err(CoreError::Invalid(format!("unknown level '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub id: Uuid,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub level: Level,
    pub points: i32,
    pub current_streak: i32,
    pub max_streak: i32,
    pub last_active_date: Option<NaiveDate>,
    #[schema(value_type = Object)]
    pub preferences: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// A fresh Bronze profile for the caller.
    pub fn new(identity: &Identity) -> Self {
        let now = Utc::now();

        Self {
            id: identity.id(),
            email: identity.email.clone(),
            full_name: None,
            avatar_url: None,
            level: Level::Bronze,
            points: 0,
            current_streak: 0,
            max_streak: 0,
            last_active_date: None,
            preferences: serde_json::Value::Object(Default::default()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Adds points and moves the level up when a threshold is crossed.
    pub fn award(&mut self, points: i32) {
        self.points = self.points.saturating_add(points.max(0));
        self.level = self.level.max(Level::for_points(self.points));
        self.updated_at = Utc::now();
    }

    pub fn next_level_points(&self) -> i32 {
        self.level.next_level_points()
    }

    pub fn points_to_next_level(&self) -> i32 {
        (self.next_level_points() - self.points).max(0)
    }

    /// Streak bookkeeping for a visit on `today`. Returns false when the
    /// day was already counted.
    pub fn record_activity(&mut self, today: NaiveDate) -> bool {
        match self.last_active_date {
            Some(last) if last >= today => return false,
            Some(last) if today.signed_duration_since(last).num_days() == 1 => {
                self.current_streak += 1;
            }
            _ => self.current_streak = 1,
        }

        self.max_streak = self.max_streak.max(self.current_streak);
        self.last_active_date = Some(today);
        self.updated_at = Utc::now();
        true
    }

    pub fn answers(&self) -> Option<QuestionnaireAnswers> {
        serde_json::from_value::<QuestionnaireAnswers>(self.preferences.clone())
            .ok()
            .filter(|answers| !answers.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile::new(&Identity::new(Uuid::new_v4(), Some("ana@weekfit.app".to_string())))
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, day).unwrap()
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(Level::for_points(0), Level::Bronze);
        assert_eq!(Level::for_points(499), Level::Bronze);
        assert_eq!(Level::for_points(500), Level::Silver);
        assert_eq!(Level::for_points(2999), Level::Gold);
        assert_eq!(Level::for_points(3000), Level::Platinum);
        assert_eq!(Level::for_points(5000), Level::Diamond);
        assert_eq!(Level::Platinum.next_level_points(), 5000);
        assert_eq!(Level::Diamond.next_level_points(), 10000);
    }

    #[test]
    fn test_award_promotes_and_never_demotes() {
        let mut profile = profile();
        profile.award(450);
        assert_eq!(profile.level, Level::Bronze);
        assert_eq!(profile.points_to_next_level(), 50);

        profile.award(100);
        assert_eq!(profile.level, Level::Silver);
        assert_eq!(profile.points, 550);

        profile.level = Level::Gold;
        profile.award(10);
        assert_eq!(profile.level, Level::Gold);
    }

    #[test]
    fn test_streaks_by_calendar_day() {
        let mut profile = profile();
        assert!(profile.record_activity(date(1)));
        assert_eq!(profile.current_streak, 1);

        assert!(!profile.record_activity(date(1)));
        assert!(profile.record_activity(date(2)));
        assert!(profile.record_activity(date(3)));
        assert_eq!(profile.current_streak, 3);

        assert!(profile.record_activity(date(6)));
        assert_eq!(profile.current_streak, 1);
        assert_eq!(profile.max_streak, 3);
        assert_eq!(profile.last_active_date, Some(date(6)));
    }

    #[test]
    fn test_level_serializes_capitalized() {
        assert_eq!(serde_json::to_value(Level::Platinum).unwrap(), "Platinum");
        assert_eq!("Gold".parse::<Level>().unwrap(), Level::Gold);
    }
}
