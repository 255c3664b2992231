pub mod progress_repository;
