use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::menu::entities::LoadedMenu;

/// Reads counts the model may send as `400`, `400.0` or `"400 kcal"`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n
            .as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0)
            .map(|f| f.round() as u32),
        serde_json::Value::String(s) => s
            .trim()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect::<String>()
            .parse()
            .ok(),
        _ => None,
    }))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Nutrition {
    #[serde(default, deserialize_with = "lenient_number")]
    pub calories: Option<u32>,
    #[serde(default)]
    pub protein: String,
    #[serde(default)]
    pub carbs: String,
    #[serde(default)]
    pub fat: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiRecipe {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prep_time: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub servings: Option<u32>,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AiMeal {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub calories: Option<u32>,
    #[serde(default)]
    pub time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Macros {
    #[serde(default)]
    pub protein: String,
    #[serde(default)]
    pub carbs: String,
    #[serde(default)]
    pub fat: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AiMenuDay {
    #[serde(default)]
    pub day: String,
    /// Keyed by slot name (`breakfast`, `morning_snack`, ...).
    #[serde(default)]
    pub meals: BTreeMap<String, AiMeal>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_calories: Option<u32>,
    #[serde(default)]
    pub macros: Option<Macros>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AiWeeklyMenu {
    #[serde(rename = "weeklyMenu", default)]
    pub weekly_menu: Vec<AiMenuDay>,
    /// Category name to items, as the model grouped them.
    #[serde(default)]
    pub shopping_list: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedWeeklyMenu {
    pub menu: AiWeeklyMenu,
    /// Set when the caller asked to keep the menu as their current one.
    pub saved: Option<LoadedMenu>,
}
