pub mod mappers;
pub mod repositories;

pub use repositories::weekly_menu_repository::PostgresWeeklyMenuRepository;
