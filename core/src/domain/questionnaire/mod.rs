pub mod catalog;
pub mod entities;
pub mod flow;
pub mod ports;
pub mod services;

pub use entities::*;
pub use flow::{QuestionnaireSession, StepOutcome, validate_answers};
