pub mod prelude;

pub mod achievements;
pub mod challenges;
pub mod daily_challenges;
pub mod profiles;
pub mod user_achievements;
pub mod user_progress;
pub mod weekly_menus;
