use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    ai::{
        entities::AiWeeklyMenu,
        parsing::INVALID_MENU_FORMAT,
    },
    common::entities::app_errors::CoreError,
    menu::entities::{DayOfWeek, MealSlot, MenuMeals, WeeklyMenu, week_start_for},
    shopping_list::{ShoppingCategory, ShoppingList},
};

/// Turns a model-generated week into a weekly menu. Days are taken by
/// position, meals with an unknown slot or no name are dropped, and
/// shopping categories are mapped onto ours (grains count as carbs).
pub fn into_weekly_menu(
    generated: &AiWeeklyMenu,
    user_id: Uuid,
    today: NaiveDate,
    preferences: serde_json::Value,
) -> Result<WeeklyMenu, CoreError> {
    let mut meals = MenuMeals::new();

    for (index, day) in generated.weekly_menu.iter().enumerate() {
        let Some(day_of_week) = DayOfWeek::from_index(index) else {
            break;
        };

        for (key, meal) in &day.meals {
            let name = meal.name.trim();
            if name.is_empty() {
                continue;
            }
            if let Ok(slot) = key.parse::<MealSlot>() {
                meals
                    .entry(day_of_week)
                    .or_default()
                    .insert(slot, name.to_string());
            }
        }
    }

    if meals.is_empty() {
        return Err(CoreError::InvalidAiResponse(INVALID_MENU_FORMAT.to_string()));
    }

    let mut shopping_list = ShoppingList::default();
    for (category, items) in &generated.shopping_list {
        shopping_list
            .items_mut(ShoppingCategory::from_key(category))
            .extend(items.iter().map(|i| i.trim().to_string()).filter(|i| !i.is_empty()));
    }

    Ok(WeeklyMenu::new(
        user_id,
        week_start_for(today),
        meals,
        Vec::new(),
        shopping_list,
        preferences,
    ))
}
