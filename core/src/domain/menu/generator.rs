use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{
        catalog::options_for,
        entities::{DayOfWeek, MealSlot, MenuMeals, WeeklyMenu, week_start_for},
    },
    questionnaire::QuestionnaireAnswers,
    recipe::builder::build_recipe,
    shopping_list::ShoppingList,
};

/// Slots selected in `refeicoes`, in the order of the day.
pub fn meal_slots(answers: &QuestionnaireAnswers) -> Vec<MealSlot> {
    let mut slots: Vec<MealSlot> = answers
        .meals
        .iter()
        .filter_map(|m| MealSlot::from_answer(m))
        .collect();
    slots.sort();
    slots.dedup();

    if slots.is_empty() {
        MealSlot::DEFAULT.to_vec()
    } else {
        slots
    }
}

pub fn pick_meal(answers: &QuestionnaireAnswers, day: DayOfWeek, slot: MealSlot) -> String {
    let options = options_for(answers, slot);
    options[day.index() % options.len()].to_string()
}

/// Builds a full week from the questionnaire answers, with a recipe for
/// every meal and the shopping list derived from those recipes.
pub fn generate_menu(user_id: Uuid, answers: &QuestionnaireAnswers, today: NaiveDate) -> WeeklyMenu {
    let slots = meal_slots(answers);
    let mut meals = MenuMeals::new();
    for day in DayOfWeek::ALL {
        let day_meals = meals.entry(day).or_default();
        for slot in &slots {
            day_meals.insert(*slot, pick_meal(answers, day, *slot));
        }
    }

    let mut menu = WeeklyMenu::new(
        user_id,
        week_start_for(today),
        meals,
        Vec::new(),
        ShoppingList::default(),
        serde_json::to_value(answers).unwrap_or_default(),
    );
    ensure_recipes(&mut menu, &answers.cooking_time);
    menu.rebuild_shopping_list();

    menu
}

/// Builds the recipe of every meal that has none, or whose recipe belongs
/// to a meal that was since replaced.
pub fn ensure_recipes(menu: &mut WeeklyMenu, cooking_time: &str) {
    let stale: Vec<(DayOfWeek, MealSlot, String)> = menu
        .planned_meals()
        .filter(|(day, slot, name)| {
            menu.recipe(*day, *slot)
                .is_none_or(|recipe| recipe.meal_name != *name)
        })
        .map(|(day, slot, name)| (day, slot, name.to_string()))
        .collect();

    for (day, slot, name) in stale {
        let recipe = build_recipe(day, slot, &name, cooking_time);
        menu.set_recipe(day, slot, recipe);
    }
}

/// Swaps one meal for the next catalog entry that differs from it. Returns
/// the new meal name.
pub fn regenerate_meal(
    menu: &mut WeeklyMenu,
    day: DayOfWeek,
    slot: MealSlot,
    answers: &QuestionnaireAnswers,
) -> Result<String, CoreError> {
    let current = menu.meal(day, slot).ok_or(CoreError::NotFound)?.to_string();
    let options = options_for(answers, slot);

    let start = options
        .iter()
        .position(|o| *o == current)
        .map(|p| p + 1)
        .unwrap_or(day.index());

    let replacement = (0..options.len())
        .map(|offset| options[(start + offset) % options.len()])
        .find(|candidate| *candidate != current)
        .map(str::to_string)
        .unwrap_or(current);

    menu.set_meal(day, slot, replacement.clone());
    ensure_recipes(menu, &answers.cooking_time);
    menu.rebuild_shopping_list();

    Ok(replacement)
}
