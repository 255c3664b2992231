use std::{collections::BTreeMap, fmt, str::FromStr};

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    questionnaire::{
        QuestionnaireAnswers,
        catalog::{VEGAN, VEGETARIAN},
    },
    recipe::entities::Recipe,
    shopping_list::{ShoppingList, build_shopping_list},
};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
            DayOfWeek::Sunday => "sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| CoreError::Invalid(format!("unknown day '{}'", s)))
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    MorningSnack,
    Lunch,
    AfternoonSnack,
    Dinner,
    Supper,
}

impl MealSlot {
    pub const ALL: [MealSlot; 6] = [
        MealSlot::Breakfast,
        MealSlot::MorningSnack,
        MealSlot::Lunch,
        MealSlot::AfternoonSnack,
        MealSlot::Dinner,
        MealSlot::Supper,
    ];

    pub const DEFAULT: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::MorningSnack => "morning_snack",
            MealSlot::Lunch => "lunch",
            MealSlot::AfternoonSnack => "afternoon_snack",
            MealSlot::Dinner => "dinner",
            MealSlot::Supper => "supper",
        }
    }

    /// Slot for a `refeicoes` questionnaire value. There is no answer for
    /// the morning snack.
    pub fn from_answer(value: &str) -> Option<Self> {
        match value {
            "cafe" => Some(MealSlot::Breakfast),
            "almoco" => Some(MealSlot::Lunch),
            "lanche" => Some(MealSlot::AfternoonSnack),
            "jantar" => Some(MealSlot::Dinner),
            "ceia" => Some(MealSlot::Supper),
            _ => None,
        }
    }

    /// Breakfast, snacks and supper are quick to put together.
    pub fn is_light(&self) -> bool {
        !matches!(self, MealSlot::Lunch | MealSlot::Dinner)
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| CoreError::Invalid(format!("unknown meal slot '{}'", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietKind {
    Regular,
    Vegetarian,
    Vegan,
}

impl DietKind {
    pub fn from_answers(answers: &QuestionnaireAnswers) -> Self {
        if answers.has_restriction(VEGAN) {
            DietKind::Vegan
        } else if answers.has_restriction(VEGETARIAN) {
            DietKind::Vegetarian
        } else {
            DietKind::Regular
        }
    }
}

pub type DayMeals = BTreeMap<MealSlot, String>;
pub type MenuMeals = BTreeMap<DayOfWeek, DayMeals>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlannedRecipe {
    pub day: DayOfWeek,
    pub slot: MealSlot,
    pub recipe: Recipe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeeklyMenu {
    pub id: Uuid,
    pub user_id: Uuid,
    pub week_start: NaiveDate,
    #[schema(value_type = Object)]
    pub meals: MenuMeals,
    #[serde(default)]
    pub recipes: Vec<PlannedRecipe>,
    #[serde(default)]
    pub shopping_list: ShoppingList,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub ai_preferences: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl WeeklyMenu {
    pub fn new(
        user_id: Uuid,
        week_start: NaiveDate,
        meals: MenuMeals,
        recipes: Vec<PlannedRecipe>,
        shopping_list: ShoppingList,
        ai_preferences: serde_json::Value,
    ) -> Self {
        Self {
            id: generate_uuid_v7(),
            user_id,
            week_start,
            meals,
            recipes,
            shopping_list,
            ai_preferences,
            created_at: Utc::now(),
        }
    }

    pub fn meal(&self, day: DayOfWeek, slot: MealSlot) -> Option<&str> {
        self.meals
            .get(&day)
            .and_then(|meals| meals.get(&slot))
            .map(String::as_str)
    }

    pub fn set_meal(&mut self, day: DayOfWeek, slot: MealSlot, name: String) {
        self.meals.entry(day).or_default().insert(slot, name);
    }

    pub fn recipe(&self, day: DayOfWeek, slot: MealSlot) -> Option<&Recipe> {
        self.recipes
            .iter()
            .find(|r| r.day == day && r.slot == slot)
            .map(|r| &r.recipe)
    }

    pub fn set_recipe(&mut self, day: DayOfWeek, slot: MealSlot, recipe: Recipe) {
        match self.recipes.iter_mut().find(|r| r.day == day && r.slot == slot) {
            Some(planned) => planned.recipe = recipe,
            None => self.recipes.push(PlannedRecipe { day, slot, recipe }),
        }
    }

    /// Every planned meal, day by day in slot order.
    pub fn planned_meals(&self) -> impl Iterator<Item = (DayOfWeek, MealSlot, &str)> {
        self.meals.iter().flat_map(|(day, meals)| {
            meals
                .iter()
                .map(move |(slot, name)| (*day, *slot, name.as_str()))
        })
    }

    /// Recomputes the shopping list from the recipes of the planned meals.
    pub fn rebuild_shopping_list(&mut self) {
        let lists: Vec<&[String]> = self
            .planned_meals()
            .filter_map(|(day, slot, _)| self.recipe(day, slot))
            .map(|recipe| recipe.ingredients.as_slice())
            .collect();

        self.shopping_list = build_shopping_list(lists);
    }

    /// Preferences the menu was generated from, when they are questionnaire
    /// answers.
    pub fn answers(&self) -> Option<QuestionnaireAnswers> {
        serde_json::from_value::<QuestionnaireAnswers>(self.ai_preferences.clone())
            .ok()
            .filter(|answers| !answers.is_empty())
    }
}

/// Monday of the week containing `today`.
pub fn week_start_for(today: NaiveDate) -> NaiveDate {
    today - Duration::days(today.weekday().num_days_from_monday() as i64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MenuSource {
    Database,
    LocalFallback,
    Sample,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoadedMenu {
    pub menu: WeeklyMenu,
    pub source: MenuSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_and_slot_keys() {
        assert_eq!("friday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Friday);
        assert_eq!(DayOfWeek::from_index(6), Some(DayOfWeek::Sunday));
        assert_eq!(DayOfWeek::from_index(7), None);
        assert_eq!(
            "afternoon_snack".parse::<MealSlot>().unwrap(),
            MealSlot::AfternoonSnack
        );
        assert!("brunch".parse::<MealSlot>().is_err());
        assert_eq!(MealSlot::from_answer("ceia"), Some(MealSlot::Supper));
        assert_eq!(MealSlot::from_answer("brunch"), None);
    }

    #[test]
    fn test_meals_serialize_with_named_keys() {
        let mut meals = MenuMeals::new();
        meals
            .entry(DayOfWeek::Monday)
            .or_default()
            .insert(MealSlot::MorningSnack, "Frutas".to_string());

        let json = serde_json::to_value(&meals).unwrap();
        assert_eq!(json["monday"]["morning_snack"], "Frutas");

        let back: MenuMeals = serde_json::from_value(json).unwrap();
        assert_eq!(back, meals);
    }

    #[test]
    fn test_week_start_is_monday() {
        let thursday = NaiveDate::from_ymd_opt(2025, 3, 13).unwrap();
        assert_eq!(
            week_start_for(thursday),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
        );
        let monday = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(week_start_for(monday), monday);
    }

    #[test]
    fn test_diet_kind_prefers_vegan() {
        let mut answers = QuestionnaireAnswers::default();
        assert_eq!(DietKind::from_answers(&answers), DietKind::Regular);
        answers.restrictions = vec![VEGETARIAN.to_string(), VEGAN.to_string()];
        assert_eq!(DietKind::from_answers(&answers), DietKind::Vegan);
        answers.restrictions = vec![VEGETARIAN.to_string()];
        assert_eq!(DietKind::from_answers(&answers), DietKind::Vegetarian);
    }
}
