use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    menu::entities::{DayOfWeek, MealSlot, MenuMeals, WeeklyMenu, week_start_for},
    shopping_list::ShoppingList,
};

const SAMPLE_MEALS: [(DayOfWeek, [&str; 3]); 7] = [
    (
        DayOfWeek::Monday,
        [
            "Aveia com frutas vermelhas e mel",
            "Frango grelhado com quinoa e legumes refogados",
            "Salmão assado com batata doce e aspargos",
        ],
    ),
    (
        DayOfWeek::Tuesday,
        [
            "Smoothie de banana, aveia e leite de amêndoas",
            "Salada de atum com grão-de-bico e vegetais",
            "Peito de peru com arroz integral e brócolis",
        ],
    ),
    (
        DayOfWeek::Wednesday,
        [
            "Iogurte natural com granola e frutas",
            "Peixe grelhado com purê de batata doce",
            "Omelete de legumes com salada verde",
        ],
    ),
    (
        DayOfWeek::Thursday,
        [
            "Smoothie verde com espinafre, banana e aveia",
            "Carne magra com salada de quinoa",
            "Frango assado com batatas e cenouras",
        ],
    ),
    (
        DayOfWeek::Friday,
        [
            "Panqueca de aveia com frutas",
            "Wrap de frango com vegetais",
            "Peixe com arroz integral e legumes no vapor",
        ],
    ),
    (
        DayOfWeek::Saturday,
        [
            "Vitamina de frutas com granola",
            "Hambúrguer de frango com salada",
            "Sopa de legumes com proteína",
        ],
    ),
    (
        DayOfWeek::Sunday,
        [
            "Torradas integrais com abacate",
            "Salada completa com proteína",
            "Jantar leve com sopa e sanduíche natural",
        ],
    ),
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|i| i.to_string()).collect()
}

fn sample_shopping_list() -> ShoppingList {
    ShoppingList {
        proteins: owned(&[
            "Frango (1,5kg)",
            "Salmão (800g)",
            "Atum em lata (3un)",
            "Ovos (12un)",
            "Peito de peru (500g)",
        ]),
        carbs: owned(&[
            "Quinoa (500g)",
            "Batata doce (1,5kg)",
            "Arroz integral (1kg)",
            "Aveia (500g)",
            "Pão integral (1un)",
        ]),
        vegetables: owned(&[
            "Brócolis (2un)",
            "Cenoura (1kg)",
            "Abobrinha (3un)",
            "Espinafre (2 maços)",
            "Tomate (1kg)",
            "Cebola (5un)",
            "Aspargos (1 maço)",
        ]),
        fruits: owned(&[
            "Banana (1,5kg)",
            "Maçã (8un)",
            "Frutas vermelhas (500g)",
            "Abacate (3un)",
            "Limão (6un)",
        ]),
        dairy: owned(&[
            "Iogurte natural (1L)",
            "Leite de amêndoas (1L)",
            "Queijo (300g)",
        ]),
        others: owned(&[
            "Azeite de oliva",
            "Mel",
            "Granola",
            "Temperos diversos",
            "Grão-de-bico (lata)",
        ]),
    }
}

/// Menu shown to users who have not generated one yet. It is never stored
/// as is.
pub fn sample_menu(user_id: Uuid, today: NaiveDate) -> WeeklyMenu {
    let mut meals = MenuMeals::new();
    for (day, [breakfast, lunch, dinner]) in SAMPLE_MEALS {
        let day_meals = meals.entry(day).or_default();
        day_meals.insert(MealSlot::Breakfast, breakfast.to_string());
        day_meals.insert(MealSlot::Lunch, lunch.to_string());
        day_meals.insert(MealSlot::Dinner, dinner.to_string());
    }

    WeeklyMenu::new(
        user_id,
        week_start_for(today),
        meals,
        Vec::new(),
        sample_shopping_list(),
        serde_json::Value::Object(Default::default()),
    )
}
