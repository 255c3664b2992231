pub mod achievement;
pub mod auth;
pub mod challenge;
pub mod db;
pub mod fallback;
pub mod health;
pub mod llm;
pub mod menu;
pub mod profile;
pub mod progress;
