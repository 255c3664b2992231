use sea_orm::ActiveValue::Set;
use serde::de::DeserializeOwned;

use crate::{
    domain::{common::entities::app_errors::CoreError, menu::entities::WeeklyMenu},
    entity::weekly_menus::{ActiveModel, Model as WeeklyMenuModel},
    infrastructure::db::errors::decode_err,
};

const TABLE: &str = "weekly_menus";

/// A null column reads as the type's default.
fn decode_json<T: DeserializeOwned + Default>(value: serde_json::Value) -> Result<T, CoreError> {
    if value.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(value).map_err(|e| decode_err(TABLE, e))
}

fn encode_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, CoreError> {
    serde_json::to_value(value).map_err(|e| decode_err(TABLE, e))
}

impl TryFrom<WeeklyMenuModel> for WeeklyMenu {
    type Error = CoreError;

    fn try_from(model: WeeklyMenuModel) -> Result<Self, Self::Error> {
        Ok(WeeklyMenu {
            id: model.id,
            user_id: model.user_id,
            week_start: model.week_start,
            meals: decode_json(model.meals)?,
            recipes: decode_json(model.recipes)?,
            shopping_list: decode_json(model.shopping_list)?,
            ai_preferences: model.ai_preferences,
            created_at: model.created_at.to_utc(),
        })
    }
}

pub fn active_model(menu: &WeeklyMenu) -> Result<ActiveModel, CoreError> {
    Ok(ActiveModel {
        id: Set(menu.id),
        user_id: Set(menu.user_id),
        week_start: Set(menu.week_start),
        meals: Set(encode_json(&menu.meals)?),
        recipes: Set(encode_json(&menu.recipes)?),
        shopping_list: Set(encode_json(&menu.shopping_list)?),
        ai_preferences: Set(menu.ai_preferences.clone()),
        created_at: Set(menu.created_at.fixed_offset()),
    })
}
