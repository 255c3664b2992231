pub mod mappers;
pub mod repositories;

pub use repositories::{
    challenge_repository::PostgresChallengeRepository,
    daily_challenge_repository::PostgresDailyChallengeRepository,
};
