pub mod mappers;
pub mod repositories;

pub use repositories::achievement_repository::PostgresAchievementRepository;
