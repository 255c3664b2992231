pub mod achievement;
pub mod ai;
pub mod challenge;
pub mod dashboard;
pub mod health;
pub mod menu;
pub mod profile;
pub mod progress;
pub mod questionnaire;
pub mod recipe;
pub mod server;
