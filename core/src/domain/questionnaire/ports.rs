use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    menu::entities::LoadedMenu,
    questionnaire::entities::{Question, QuestionnaireAnswers},
};

pub trait QuestionnaireService: Send + Sync {
    fn get_questions(&self) -> Vec<Question>;

    /// Stores the answers as the caller's preferences and generates their
    /// weekly menu.
    fn submit_questionnaire(
        &self,
        identity: Identity,
        answers: QuestionnaireAnswers,
    ) -> impl Future<Output = Result<LoadedMenu, CoreError>> + Send;
}
