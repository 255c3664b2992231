use std::collections::HashMap;

use crate::domain::{
    common::normalize_text,
    shopping_list::entities::{ShoppingCategory, ShoppingList},
};

const DAIRY: &[&str] = &["leite", "iogurte", "queijo", "requeijão", "manteiga", "creme de leite"];
const PROTEINS: &[&str] = &[
    "frango", "carne", "patinho", "peixe", "salmão", "tilápia", "atum", "peru", "ovo", "tofu",
    "lentilha", "feijão", "grão-de-bico", "whey", "camarão",
];
const CARBS: &[&str] = &[
    "arroz", "aveia", "quinoa", "batata", "pão", "macarrão", "tapioca", "granola", "mandioca",
    "cuscuz", "torrada", "milho", "wrap",
];
const VEGETABLES: &[&str] = &[
    "brócolis", "cenoura", "abobrinha", "espinafre", "tomate", "cebola", "aspargo", "alface",
    "couve", "berinjela", "cogumelo", "pimentão", "abóbora", "pepino", "rúcula", "legumes",
    "vagem",
];
const FRUITS: &[&str] = &[
    "banana", "maçã", "fruta", "abacate", "limão", "morango", "manga", "mamão", "laranja", "uva",
    "abacaxi", "kiwi",
];

/// Buckets an ingredient by the first keyword group it contains.
pub fn categorize(ingredient: &str) -> ShoppingCategory {
    let name = normalize_text(ingredient);
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| name.contains(k));

    if contains_any(DAIRY) {
        ShoppingCategory::Dairy
    } else if contains_any(PROTEINS) {
        ShoppingCategory::Proteins
    } else if contains_any(CARBS) {
        ShoppingCategory::Carbs
    } else if contains_any(VEGETABLES) {
        ShoppingCategory::Vegetables
    } else if contains_any(FRUITS) {
        ShoppingCategory::Fruits
    } else {
        ShoppingCategory::Others
    }
}

/// Flattens the ingredient lists of a menu into one categorized list.
/// Ingredients are merged on their normalized form and keep the spelling
/// they were first seen with; repeated ones get a `(Nx)` suffix.
pub fn build_shopping_list<'a, I>(ingredient_lists: I) -> ShoppingList
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut order: Vec<(String, String)> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for ingredient in ingredient_lists.into_iter().flatten() {
        let display = ingredient.split_whitespace().collect::<Vec<&str>>().join(" ");
        if display.is_empty() {
            continue;
        }

        let key = normalize_text(&display);
        let count = counts.entry(key.clone()).or_insert(0);
        if *count == 0 {
            order.push((key, display));
        }
        *count += 1;
    }

    let mut list = ShoppingList::default();
    for (key, display) in order {
        let count = counts.get(&key).copied().unwrap_or(1);
        let item = if count > 1 {
            format!("{} ({}x)", display, count)
        } else {
            display
        };
        list.items_mut(categorize(&key)).push(item);
    }

    list
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_categorize_keyword_groups() {
        assert_eq!(categorize("Peito de frango"), ShoppingCategory::Proteins);
        assert_eq!(categorize("Iogurte natural"), ShoppingCategory::Dairy);
        assert_eq!(categorize("Leite de amêndoas"), ShoppingCategory::Dairy);
        assert_eq!(categorize("Arroz integral"), ShoppingCategory::Carbs);
        assert_eq!(categorize("Batata doce"), ShoppingCategory::Carbs);
        assert_eq!(categorize("Brócolis"), ShoppingCategory::Vegetables);
        assert_eq!(categorize("Frutas vermelhas"), ShoppingCategory::Fruits);
        assert_eq!(categorize("Azeite de oliva"), ShoppingCategory::Others);
    }

    #[test]
    fn test_dairy_wins_over_other_groups() {
        assert_eq!(categorize("Queijo de frango"), ShoppingCategory::Dairy);
    }

    #[test]
    fn test_build_counts_and_deduplicates() {
        let monday = strings(&["Peito de frango", "Arroz integral", "Brócolis"]);
        let tuesday = strings(&["peito de  frango", "Banana", "Arroz Integral"]);
        let wednesday = strings(&["Peito de frango ", "Azeite de oliva"]);

        let list = build_shopping_list([
            monday.as_slice(),
            tuesday.as_slice(),
            wednesday.as_slice(),
        ]);

        assert_eq!(list.proteins, strings(&["Peito de frango (3x)"]));
        assert_eq!(list.carbs, strings(&["Arroz integral (2x)"]));
        assert_eq!(list.vegetables, strings(&["Brócolis"]));
        assert_eq!(list.fruits, strings(&["Banana"]));
        assert_eq!(list.others, strings(&["Azeite de oliva"]));
        assert!(list.dairy.is_empty());
    }

    #[test]
    fn test_no_duplicate_normalized_items() {
        let lists = vec![
            strings(&["Ovos", "ovos", "OVOS", "Tomate", "Cebola"]),
            strings(&["Tomate", " cebola", "Queijo branco", "queijo  branco"]),
        ];
        let list = build_shopping_list(lists.iter().map(Vec::as_slice));

        let strip_count = |item: &str| match item.rfind(" (") {
            Some(position) if item.ends_with("x)") => item[..position].to_string(),
            _ => item.to_string(),
        };
        let mut seen = HashSet::new();
        for item in list.all_items() {
            assert!(seen.insert(normalize_text(&strip_count(item))), "duplicate {}", item);
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_blank_ingredients_are_skipped() {
        let lists = [strings(&["  ", "", "Mel"])];
        let list = build_shopping_list(lists.iter().map(Vec::as_slice));
        assert_eq!(list.others, strings(&["Mel"]));
        assert_eq!(list.all_items().count(), 1);
    }
}
