pub mod challenge_repository;
pub mod daily_challenge_repository;
