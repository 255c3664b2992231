use crate::domain::menu::entities::{DayOfWeek, MealSlot};

#[derive(Debug, Clone, Copy)]
pub struct RegenerateMealInput {
    pub day: DayOfWeek,
    pub slot: MealSlot,
}
