use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum QuestionId {
    #[serde(rename = "objetivo")]
    Goal,
    #[serde(rename = "restricoes")]
    Restrictions,
    #[serde(rename = "orcamento")]
    Budget,
    #[serde(rename = "tempo")]
    CookingTime,
    #[serde(rename = "experiencia")]
    Experience,
    #[serde(rename = "preferencias")]
    Cuisines,
    #[serde(rename = "refeicoes")]
    Meals,
}

impl QuestionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionId::Goal => "objetivo",
            QuestionId::Restrictions => "restricoes",
            QuestionId::Budget => "orcamento",
            QuestionId::CookingTime => "tempo",
            QuestionId::Experience => "experiencia",
            QuestionId::Cuisines => "preferencias",
            QuestionId::Meals => "refeicoes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Single,
    Multiple,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionOption {
    pub value: String,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
    pub subtitle: String,
    pub kind: QuestionKind,
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}

/// Answers collected by the questionnaire, keyed by the question ids the
/// frontend sends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionnaireAnswers {
    #[serde(rename = "objetivo", default)]
    pub goal: String,
    #[serde(rename = "restricoes", default)]
    pub restrictions: Vec<String>,
    #[serde(rename = "orcamento", default)]
    pub budget: String,
    #[serde(rename = "tempo", default)]
    pub cooking_time: String,
    #[serde(rename = "experiencia", default)]
    pub experience: String,
    #[serde(rename = "preferencias", default)]
    pub cuisines: Vec<String>,
    #[serde(rename = "refeicoes", default)]
    pub meals: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer<'a> {
    Single(&'a str),
    Multiple(&'a [String]),
}

pub enum AnswerSlot<'a> {
    Single(&'a mut String),
    Multiple(&'a mut Vec<String>),
}

impl QuestionnaireAnswers {
    pub fn answer(&self, id: QuestionId) -> Answer<'_> {
        match id {
            QuestionId::Goal => Answer::Single(&self.goal),
            QuestionId::Restrictions => Answer::Multiple(&self.restrictions),
            QuestionId::Budget => Answer::Single(&self.budget),
            QuestionId::CookingTime => Answer::Single(&self.cooking_time),
            QuestionId::Experience => Answer::Single(&self.experience),
            QuestionId::Cuisines => Answer::Multiple(&self.cuisines),
            QuestionId::Meals => Answer::Multiple(&self.meals),
        }
    }

    pub fn slot_mut(&mut self, id: QuestionId) -> AnswerSlot<'_> {
        match id {
            QuestionId::Goal => AnswerSlot::Single(&mut self.goal),
            QuestionId::Restrictions => AnswerSlot::Multiple(&mut self.restrictions),
            QuestionId::Budget => AnswerSlot::Single(&mut self.budget),
            QuestionId::CookingTime => AnswerSlot::Single(&mut self.cooking_time),
            QuestionId::Experience => AnswerSlot::Single(&mut self.experience),
            QuestionId::Cuisines => AnswerSlot::Multiple(&mut self.cuisines),
            QuestionId::Meals => AnswerSlot::Multiple(&mut self.meals),
        }
    }

    pub fn has_restriction(&self, value: &str) -> bool {
        self.restrictions.iter().any(|r| r == value)
    }

    /// True when nothing was answered yet, e.g. a profile whose preferences
    /// blob is empty.
    pub fn is_empty(&self) -> bool {
        self == &QuestionnaireAnswers::default()
    }
}
