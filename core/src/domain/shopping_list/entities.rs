use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ShoppingCategory {
    Proteins,
    Carbs,
    Vegetables,
    Fruits,
    Dairy,
    Others,
}

impl ShoppingCategory {
    /// Maps the category names used by AI-generated lists. Grains are carbs
    /// here; anything unknown ends up in others.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "proteins" | "proteinas" | "proteínas" => ShoppingCategory::Proteins,
            "carbs" | "grains" | "carboidratos" | "graos" | "grãos" => ShoppingCategory::Carbs,
            "vegetables" | "vegetais" | "legumes" => ShoppingCategory::Vegetables,
            "fruits" | "frutas" => ShoppingCategory::Fruits,
            "dairy" | "laticinios" | "laticínios" => ShoppingCategory::Dairy,
            _ => ShoppingCategory::Others,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingList {
    #[serde(default)]
    pub proteins: Vec<String>,
    #[serde(default)]
    pub carbs: Vec<String>,
    #[serde(default)]
    pub vegetables: Vec<String>,
    #[serde(default)]
    pub fruits: Vec<String>,
    #[serde(default)]
    pub dairy: Vec<String>,
    #[serde(default)]
    pub others: Vec<String>,
}

impl ShoppingList {
    pub fn items_mut(&mut self, category: ShoppingCategory) -> &mut Vec<String> {
        match category {
            ShoppingCategory::Proteins => &mut self.proteins,
            ShoppingCategory::Carbs => &mut self.carbs,
            ShoppingCategory::Vegetables => &mut self.vegetables,
            ShoppingCategory::Fruits => &mut self.fruits,
            ShoppingCategory::Dairy => &mut self.dairy,
            ShoppingCategory::Others => &mut self.others,
        }
    }

    pub fn all_items(&self) -> impl Iterator<Item = &String> {
        self.proteins
            .iter()
            .chain(&self.carbs)
            .chain(&self.vegetables)
            .chain(&self.fruits)
            .chain(&self.dairy)
            .chain(&self.others)
    }

    pub fn is_empty(&self) -> bool {
        self.all_items().next().is_none()
    }
}
