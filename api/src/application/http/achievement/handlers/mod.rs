pub mod check_achievements;
pub mod list_achievements;
