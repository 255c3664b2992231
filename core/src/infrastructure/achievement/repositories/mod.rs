pub mod achievement_repository;
