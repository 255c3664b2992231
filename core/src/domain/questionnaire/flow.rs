use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    questionnaire::{
        catalog::questions,
        entities::{Answer, AnswerSlot, Question, QuestionnaireAnswers},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced(usize),
    Completed(QuestionnaireAnswers),
}

/// Linear walk over the questionnaire steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireSession {
    current_step: usize,
    answers: QuestionnaireAnswers,
    #[serde(skip, default = "questions")]
    questions: Vec<Question>,
}

impl Default for QuestionnaireSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionnaireSession {
    pub fn new() -> Self {
        Self {
            current_step: 0,
            answers: QuestionnaireAnswers::default(),
            questions: questions(),
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn step_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_step]
    }

    pub fn answers(&self) -> &QuestionnaireAnswers {
        &self.answers
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step + 1 == self.questions.len()
    }

    pub fn progress_percent(&self) -> f32 {
        (self.current_step + 1) as f32 / self.questions.len() as f32 * 100.0
    }

    /// Single-choice steps replace the answer, multiple-choice steps toggle
    /// the value in or out.
    pub fn select_option(&mut self, value: &str) -> Result<(), CoreError> {
        let question = &self.questions[self.current_step];
        if !question.has_option(value) {
            return Err(CoreError::Invalid(format!(
                "'{}' is not an option of {}",
                value,
                question.id.as_str()
            )));
        }

        match self.answers.slot_mut(question.id) {
            AnswerSlot::Single(current) => *current = value.to_string(),
            AnswerSlot::Multiple(values) => {
                if let Some(position) = values.iter().position(|v| v == value) {
                    values.remove(position);
                } else {
                    values.push(value.to_string());
                }
            }
        }

        Ok(())
    }

    pub fn is_selected(&self, value: &str) -> bool {
        match self.answers.answer(self.current_question().id) {
            Answer::Single(current) => current == value,
            Answer::Multiple(values) => values.iter().any(|v| v == value),
        }
    }

    pub fn can_proceed(&self) -> bool {
        is_answered(self.answers.answer(self.current_question().id))
    }

    pub fn next(&mut self) -> Result<StepOutcome, CoreError> {
        if !self.can_proceed() {
            return Err(CoreError::Invalid(format!(
                "question {} has no answer",
                self.current_question().id.as_str()
            )));
        }

        if self.is_last_step() {
            return Ok(StepOutcome::Completed(self.answers.clone()));
        }

        self.current_step += 1;
        Ok(StepOutcome::Advanced(self.current_step))
    }

    pub fn previous(&mut self) {
        self.current_step = self.current_step.saturating_sub(1);
    }
}

fn is_answered(answer: Answer<'_>) -> bool {
    match answer {
        Answer::Single(value) => !value.is_empty(),
        Answer::Multiple(values) => !values.is_empty(),
    }
}

/// Replays the whole questionnaire over a submitted answer set.
pub fn validate_answers(answers: &QuestionnaireAnswers) -> Result<(), CoreError> {
    for question in questions() {
        let answer = answers.answer(question.id);
        if !is_answered(answer) {
            return Err(CoreError::Invalid(format!(
                "question {} has no answer",
                question.id.as_str()
            )));
        }

        let values: Vec<&str> = match answer {
            Answer::Single(value) => vec![value],
            Answer::Multiple(values) => values.iter().map(String::as_str).collect(),
        };

        if let Some(unknown) = values.iter().find(|v| !question.has_option(v)) {
            return Err(CoreError::Invalid(format!(
                "'{}' is not an option of {}",
                unknown,
                question.id.as_str()
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_answers() -> QuestionnaireAnswers {
        QuestionnaireAnswers {
            goal: "emagrecimento".to_string(),
            restrictions: vec!["nenhuma".to_string()],
            budget: "moderado".to_string(),
            cooking_time: "rapido".to_string(),
            experience: "iniciante".to_string(),
            cuisines: vec!["brasileira".to_string()],
            meals: vec!["cafe".to_string(), "almoco".to_string(), "jantar".to_string()],
        }
    }

    #[test]
    fn test_next_is_refused_until_step_is_answered() {
        let mut session = QuestionnaireSession::new();
        assert!(!session.can_proceed());
        assert!(session.next().is_err());
        assert_eq!(session.current_step(), 0);

        session.select_option("bulking").unwrap();
        assert!(session.can_proceed());
        assert_eq!(session.next().unwrap(), StepOutcome::Advanced(1));
    }

    #[test]
    fn test_single_choice_replaces_previous_value() {
        let mut session = QuestionnaireSession::new();
        session.select_option("bulking").unwrap();
        session.select_option("saude").unwrap();
        assert_eq!(session.answers().goal, "saude");
        assert!(session.is_selected("saude"));
        assert!(!session.is_selected("bulking"));
    }

    #[test]
    fn test_multiple_choice_toggles() {
        let mut session = QuestionnaireSession::new();
        session.select_option("saude").unwrap();
        session.next().unwrap();

        session.select_option("vegano").unwrap();
        session.select_option("gluten").unwrap();
        session.select_option("vegano").unwrap();
        assert_eq!(session.answers().restrictions, vec!["gluten".to_string()]);

        session.select_option("gluten").unwrap();
        assert!(!session.can_proceed());
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let mut session = QuestionnaireSession::new();
        assert!(matches!(
            session.select_option("keto"),
            Err(CoreError::Invalid(_))
        ));
    }

    #[test]
    fn test_previous_stops_at_first_step() {
        let mut session = QuestionnaireSession::new();
        session.previous();
        assert_eq!(session.current_step(), 0);

        session.select_option("manutencao").unwrap();
        session.next().unwrap();
        session.previous();
        assert_eq!(session.current_step(), 0);
        assert_eq!(session.answers().goal, "manutencao");
    }

    #[test]
    fn test_last_step_completes_with_answers() {
        let mut session = QuestionnaireSession::new();
        let picks = [
            "emagrecimento",
            "lactose",
            "economico",
            "meal_prep",
            "avancado",
            "italiana",
            "almoco",
        ];

        for (index, pick) in picks.iter().enumerate() {
            session.select_option(pick).unwrap();
            let outcome = session.next().unwrap();
            if index + 1 < picks.len() {
                assert_eq!(outcome, StepOutcome::Advanced(index + 1));
            } else {
                let StepOutcome::Completed(answers) = outcome else {
                    panic!("expected completion");
                };
                assert_eq!(answers.cooking_time, "meal_prep");
                assert_eq!(answers.meals, vec!["almoco".to_string()]);
                assert!(validate_answers(&answers).is_ok());
            }
        }
        assert_eq!(session.progress_percent(), 100.0);
    }

    #[test]
    fn test_validate_answers_requires_every_step() {
        let mut answers = complete_answers();
        assert!(validate_answers(&answers).is_ok());

        answers.meals.clear();
        assert!(validate_answers(&answers).is_err());
    }

    #[test]
    fn test_validate_answers_checks_options_after_presence() {
        let mut answers = complete_answers();
        answers.goal = "keto".to_string();
        assert!(matches!(
            validate_answers(&answers),
            Err(CoreError::Invalid(message)) if message.contains("keto")
        ));

        answers.goal.clear();
        assert!(matches!(
            validate_answers(&answers),
            Err(CoreError::Invalid(message)) if message.contains("has no answer")
        ));
    }

    #[test]
    fn test_validate_answers_rejects_unknown_values() {
        let mut answers = complete_answers();
        answers.cuisines.push("francesa".to_string());
        assert!(matches!(
            validate_answers(&answers),
            Err(CoreError::Invalid(message)) if message.contains("francesa")
        ));
    }
}
