pub mod complete_challenge;
pub mod complete_daily_challenge;
pub mod list_challenges;
pub mod todays_challenges;
