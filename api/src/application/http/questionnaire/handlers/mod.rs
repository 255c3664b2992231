pub mod get_questions;
pub mod submit_questionnaire;
