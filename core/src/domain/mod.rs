pub mod achievement;
pub mod ai;
pub mod authentication;
pub mod challenge;
pub mod common;
pub mod dashboard;
pub mod fallback;
pub mod health;
pub mod menu;
pub mod profile;
pub mod progress;
pub mod questionnaire;
pub mod recipe;
pub mod shopping_list;
