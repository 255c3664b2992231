use crate::domain::{
    common::words,
    menu::entities::{DietKind, MealSlot},
    questionnaire::{
        QuestionnaireAnswers,
        catalog::{DIABETIC, GLUTEN_FREE, LACTOSE_FREE},
    },
};

const REGULAR_BREAKFAST: &[&str] = &[
    "Ovos mexidos com torrada integral",
    "Iogurte natural com granola e frutas",
    "Panqueca de aveia com banana",
    "Tapioca com queijo branco e tomate",
    "Vitamina de frutas com aveia",
    "Pão integral com ovo e abacate",
    "Mingau de aveia com canela e maçã",
];

const REGULAR_LUNCH: &[&str] = &[
    "Frango grelhado com arroz integral e brócolis",
    "Carne magra com batata doce e salada",
    "Peixe grelhado com quinoa e legumes",
    "Macarrão integral com molho de tomate e frango",
    "Strogonoff de frango com arroz",
    "Salmão assado com purê de batata doce",
    "Feijão com arroz, carne magra e couve",
];

const REGULAR_SNACK: &[&str] = &[
    "Iogurte com frutas vermelhas",
    "Mix de castanhas e frutas secas",
    "Sanduíche natural de frango",
    "Banana com pasta de amendoim",
    "Cookies de aveia e banana",
];

const REGULAR_DINNER: &[&str] = &[
    "Omelete de legumes com salada verde",
    "Sopa de legumes com frango desfiado",
    "Tilápia assada com legumes no vapor",
    "Wrap de frango com vegetais",
    "Peito de peru com arroz integral e cenoura",
    "Salada completa com atum",
];

const VEGETARIAN_LUNCH: &[&str] = &[
    "Lasanha de berinjela com ricota",
    "Risoto de cogumelos",
    "Omelete de espinafre com arroz integral",
    "Quiche de legumes com salada",
    "Estrogonofe de grão-de-bico com arroz",
    "Abobrinha recheada com queijo e quinoa",
];

const VEGETARIAN_SNACK: &[&str] = &[
    "Iogurte com frutas vermelhas",
    "Mix de castanhas e frutas secas",
    "Queijo branco com tomate cereja",
    "Banana com pasta de amendoim",
    "Cookies de aveia e banana",
];

const VEGETARIAN_DINNER: &[&str] = &[
    "Sopa de legumes com grão-de-bico",
    "Omelete de legumes com salada verde",
    "Wrap de falafel com vegetais",
    "Tofu grelhado com legumes salteados",
    "Salada caprese com torradas integrais",
];

const LIGHT_SUPPER: &[&str] = &[
    "Chá de camomila com torradas integrais",
    "Iogurte natural com chia",
    "Leite morno com canela",
    "Frutas picadas com aveia",
    "Queijo cottage com pepino",
];

const VEGAN_BREAKFAST: &[&str] = &[
    "Mingau de aveia com bebida de amêndoas e banana",
    "Tapioca com pasta de grão-de-bico",
    "Smoothie de frutas com aveia",
    "Pão integral com abacate e tomate",
    "Tofu mexido com torrada integral",
    "Panqueca de banana e aveia",
];

const VEGAN_LUNCH: &[&str] = &[
    "Feijão com arroz integral e couve refogada",
    "Curry de grão-de-bico com arroz",
    "Hambúrguer de lentilha com salada",
    "Macarrão integral ao molho de tomate e manjericão",
    "Bowl de quinoa com legumes assados",
    "Moqueca de banana-da-terra com arroz",
];

const VEGAN_SNACK: &[&str] = &[
    "Mix de castanhas e frutas secas",
    "Banana com pasta de amendoim",
    "Homus com palitos de cenoura",
    "Frutas picadas com chia",
    "Cookies de aveia e banana",
];

const VEGAN_DINNER: &[&str] = &[
    "Sopa de lentilha com legumes",
    "Tofu grelhado com legumes salteados",
    "Wrap de falafel com vegetais",
    "Abobrinha recheada com quinoa",
    "Salada de grão-de-bico com tomate e pepino",
    "Risoto de cogumelos com caldo de legumes",
];

const VEGAN_SUPPER: &[&str] = &[
    "Chá de camomila com torradas integrais",
    "Frutas picadas com aveia",
    "Bebida de amêndoas morna com canela",
    "Pudim de chia com frutas",
];

pub const MEAT_WORDS: &[&str] = &[
    "frango", "carne", "peixe", "salmão", "atum", "peru", "tilápia", "bacon", "presunto",
    "camarão", "linguiça", "porco",
];

pub const ANIMAL_PRODUCT_WORDS: &[&str] = &[
    "ovo", "ovos", "queijo", "iogurte", "leite", "manteiga", "requeijão", "whey", "ricota",
];

const LACTOSE_WORDS: &[&str] = &[
    "queijo", "iogurte", "leite", "requeijão", "manteiga", "creme", "ricota",
];
const GLUTEN_WORDS: &[&str] = &[
    "pão", "torradas", "torrada", "macarrão", "trigo", "lasanha", "wrap", "sanduíche",
];
const SUGAR_WORDS: &[&str] = &["mel", "açúcar", "chocolate", "geleia"];

/// The static meal names for a diet and slot. The morning snack has no
/// list of its own and shares the afternoon one.
pub fn meal_names(diet: DietKind, slot: MealSlot) -> &'static [&'static str] {
    match (diet, slot) {
        (DietKind::Regular, MealSlot::Breakfast) => REGULAR_BREAKFAST,
        (DietKind::Regular, MealSlot::Lunch) => REGULAR_LUNCH,
        (DietKind::Regular, MealSlot::MorningSnack | MealSlot::AfternoonSnack) => REGULAR_SNACK,
        (DietKind::Regular, MealSlot::Dinner) => REGULAR_DINNER,
        (DietKind::Vegetarian, MealSlot::Breakfast) => REGULAR_BREAKFAST,
        (DietKind::Vegetarian, MealSlot::Lunch) => VEGETARIAN_LUNCH,
        (DietKind::Vegetarian, MealSlot::MorningSnack | MealSlot::AfternoonSnack) => {
            VEGETARIAN_SNACK
        }
        (DietKind::Vegetarian, MealSlot::Dinner) => VEGETARIAN_DINNER,
        (DietKind::Regular | DietKind::Vegetarian, MealSlot::Supper) => LIGHT_SUPPER,
        (DietKind::Vegan, MealSlot::Breakfast) => VEGAN_BREAKFAST,
        (DietKind::Vegan, MealSlot::Lunch) => VEGAN_LUNCH,
        (DietKind::Vegan, MealSlot::MorningSnack | MealSlot::AfternoonSnack) => VEGAN_SNACK,
        (DietKind::Vegan, MealSlot::Dinner) => VEGAN_DINNER,
        (DietKind::Vegan, MealSlot::Supper) => VEGAN_SUPPER,
    }
}

pub fn mentions_any(name: &str, keywords: &[&str]) -> bool {
    words(name).iter().any(|w| keywords.contains(&w.as_str()))
}

fn without(names: Vec<&'static str>, keywords: &[&str]) -> Vec<&'static str> {
    let kept: Vec<&'static str> = names
        .iter()
        .copied()
        .filter(|name| !mentions_any(name, keywords))
        .collect();

    if kept.is_empty() { names } else { kept }
}

/// Candidate meal names for a slot once the lactose, gluten and sugar
/// restrictions are applied. A filter that would leave nothing is skipped.
pub fn options_for(answers: &QuestionnaireAnswers, slot: MealSlot) -> Vec<&'static str> {
    let mut names = meal_names(DietKind::from_answers(answers), slot).to_vec();

    if answers.has_restriction(LACTOSE_FREE) {
        names = without(names, LACTOSE_WORDS);
    }
    if answers.has_restriction(GLUTEN_FREE) {
        names = without(names, GLUTEN_WORDS);
    }
    if answers.has_restriction(DIABETIC) {
        names = without(names, SUGAR_WORDS);
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::catalog::{VEGAN, VEGETARIAN};

    fn answers_with(restrictions: &[&str]) -> QuestionnaireAnswers {
        QuestionnaireAnswers {
            restrictions: restrictions.iter().map(|r| r.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_vegan_lists_have_no_animal_words() {
        for slot in MealSlot::ALL {
            for name in meal_names(DietKind::Vegan, slot) {
                assert!(!mentions_any(name, MEAT_WORDS), "{}", name);
                assert!(!mentions_any(name, ANIMAL_PRODUCT_WORDS), "{}", name);
            }
        }
    }

    #[test]
    fn test_vegetarian_lists_have_no_meat_words() {
        for slot in MealSlot::ALL {
            for name in meal_names(DietKind::Vegetarian, slot) {
                assert!(!mentions_any(name, MEAT_WORDS), "{}", name);
            }
        }
    }

    #[test]
    fn test_lactose_filter_removes_dairy() {
        let answers = answers_with(&[VEGETARIAN, LACTOSE_FREE]);
        for slot in MealSlot::ALL {
            let options = options_for(&answers, slot);
            assert!(!options.is_empty());
            assert!(options.iter().all(|n| !mentions_any(n, LACTOSE_WORDS)), "{:?}", slot);
        }
    }

    #[test]
    fn test_gluten_filter_removes_bread_and_pasta() {
        let options = options_for(&answers_with(&[GLUTEN_FREE]), MealSlot::Dinner);
        assert!(!options.contains(&"Wrap de frango com vegetais"));
        assert!(options.contains(&"Omelete de legumes com salada verde"));
    }

    #[test]
    fn test_filter_that_empties_list_is_skipped() {
        let names = vec!["Pão com manteiga", "Torrada com queijo"];
        assert_eq!(without(names.clone(), GLUTEN_WORDS), names);
    }

    #[test]
    fn test_sugar_filter_matches_whole_words() {
        assert!(!mentions_any("Omelete de cogumelos", SUGAR_WORDS));
        assert!(mentions_any("Panqueca com mel", SUGAR_WORDS));
    }

    #[test]
    fn test_vegan_wins_for_combined_restrictions() {
        let options = options_for(&answers_with(&[VEGETARIAN, VEGAN]), MealSlot::Lunch);
        assert_eq!(options, VEGAN_LUNCH.to_vec());
    }
}
