pub mod mappers;
pub mod repositories;

pub use repositories::progress_repository::PostgresProgressRepository;
