pub use super::achievements::Entity as Achievements;
pub use super::challenges::Entity as Challenges;
pub use super::daily_challenges::Entity as DailyChallenges;
pub use super::profiles::Entity as Profiles;
pub use super::user_achievements::Entity as UserAchievements;
pub use super::user_progress::Entity as UserProgress;
pub use super::weekly_menus::Entity as WeeklyMenus;
