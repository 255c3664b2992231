use crate::domain::{
    common::normalize_text,
    menu::entities::{DayOfWeek, MealSlot},
    recipe::entities::Recipe,
};

/// Meal-name fragments and the ingredients they bring in.
const INGREDIENT_TABLE: &[(&str, &[&str])] = &[
    ("frango", &["Peito de frango", "Alho", "Azeite de oliva"]),
    ("carne", &["Carne magra (patinho)", "Cebola", "Alho"]),
    ("peixe", &["Filé de peixe branco", "Limão"]),
    ("tilápia", &["Filé de tilápia", "Limão"]),
    ("salmão", &["Salmão", "Limão"]),
    ("atum", &["Atum em lata"]),
    ("peru", &["Peito de peru"]),
    ("omelete", &["Ovos", "Cebola", "Tomate"]),
    ("ovo", &["Ovos"]),
    ("tofu", &["Tofu"]),
    ("grão-de-bico", &["Grão-de-bico"]),
    ("falafel", &["Grão-de-bico", "Salsinha"]),
    ("lentilha", &["Lentilha"]),
    ("feijão", &["Feijão"]),
    ("arroz", &["Arroz integral"]),
    ("quinoa", &["Quinoa"]),
    ("batata doce", &["Batata doce"]),
    ("macarrão", &["Macarrão integral", "Molho de tomate"]),
    ("pão", &["Pão integral"]),
    ("torrada", &["Pão integral"]),
    ("tapioca", &["Goma de tapioca"]),
    ("aveia", &["Aveia em flocos"]),
    ("granola", &["Granola"]),
    ("iogurte", &["Iogurte natural"]),
    ("queijo", &["Queijo branco"]),
    ("ricota", &["Ricota"]),
    ("leite", &["Leite"]),
    ("amêndoas", &["Bebida de amêndoas"]),
    ("banana", &["Banana"]),
    ("maçã", &["Maçã"]),
    ("frutas", &["Frutas da estação"]),
    ("abacate", &["Abacate"]),
    ("castanhas", &["Mix de castanhas"]),
    ("amendoim", &["Pasta de amendoim"]),
    ("chia", &["Sementes de chia"]),
    ("brócolis", &["Brócolis"]),
    ("legumes", &["Cenoura", "Abobrinha", "Brócolis"]),
    ("salada", &["Alface", "Tomate", "Pepino"]),
    ("tomate", &["Tomate"]),
    ("pepino", &["Pepino"]),
    ("cenoura", &["Cenoura"]),
    ("cogumelo", &["Cogumelos"]),
    ("berinjela", &["Berinjela"]),
    ("abobrinha", &["Abobrinha"]),
    ("espinafre", &["Espinafre"]),
    ("couve", &["Couve"]),
    ("sopa", &["Cebola", "Alho", "Caldo de legumes caseiro"]),
    ("wrap", &["Tortilha integral"]),
    ("canela", &["Canela em pó"]),
];

const GENERIC_INGREDIENTS: &[&str] = &[
    "Legumes da estação",
    "Proteína de sua preferência",
    "Azeite de oliva",
    "Temperos naturais",
];

const MEAL_PREP: &str = "meal_prep";

/// Ingredients for a meal name, in table order without repeats.
pub fn ingredients_for(meal_name: &str) -> Vec<String> {
    let name = normalize_text(meal_name);
    let mut ingredients: Vec<String> = Vec::new();

    for (keyword, items) in INGREDIENT_TABLE {
        if !name.contains(keyword) {
            continue;
        }
        for item in items.iter() {
            if !ingredients.iter().any(|i| i == item) {
                ingredients.push(item.to_string());
            }
        }
    }

    if ingredients.is_empty() {
        return GENERIC_INGREDIENTS.iter().map(|i| i.to_string()).collect();
    }

    ingredients
}

/// `(prep, cook)` minutes for a `tempo` answer.
pub fn times_for(cooking_time: &str, slot: MealSlot) -> (u32, u32) {
    let (prep, cook) = match cooking_time {
        "rapido" => (10, 15),
        "elaborado" => (20, 45),
        _ => (15, 30),
    };

    if slot.is_light() {
        (prep, cook / 3)
    } else {
        (prep, cook)
    }
}

fn instructions_for(meal_name: &str, slot: MealSlot, cooking_time: &str) -> Vec<String> {
    let mut steps = if slot.is_light() {
        vec![
            "Separe e higienize os ingredientes.".to_string(),
            format!("Prepare {} combinando os ingredientes.", meal_name.to_lowercase()),
            "Sirva em seguida.".to_string(),
        ]
    } else {
        vec![
            "Separe e higienize todos os ingredientes.".to_string(),
            "Tempere as proteínas e deixe descansar por alguns minutos.".to_string(),
            "Cozinhe em fogo médio até o ponto desejado.".to_string(),
            format!("Monte o prato de {} e sirva.", meal_name.to_lowercase()),
        ]
    };

    if cooking_time == MEAL_PREP {
        steps.push("Divida em porções e guarde na geladeira por até 4 dias.".to_string());
    }

    steps
}

pub fn build_recipe(day: DayOfWeek, slot: MealSlot, meal_name: &str, cooking_time: &str) -> Recipe {
    let (prep_time, cook_time) = times_for(cooking_time, slot);

    Recipe {
        id: format!("{}-{}", day.as_str(), slot.as_str()),
        meal_name: meal_name.to_string(),
        ingredients: ingredients_for(meal_name),
        instructions: instructions_for(meal_name, slot, cooking_time),
        prep_time,
        cook_time,
        servings: if cooking_time == MEAL_PREP { 4 } else { 2 },
    }
}
