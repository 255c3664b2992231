use crate::domain::{common::entities::app_errors::CoreError, recipe::entities::Recipe};

const MAX_SUGGESTIONS: usize = 3;

struct KeywordGroup {
    keywords: &'static [&'static str],
    recipe: fn() -> Recipe,
}

fn recipe(
    id: &str,
    meal_name: &str,
    ingredients: &[&str],
    instructions: &[&str],
    (prep_time, cook_time, servings): (u32, u32, u32),
) -> Recipe {
    Recipe {
        id: id.to_string(),
        meal_name: meal_name.to_string(),
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        instructions: instructions.iter().map(|i| i.to_string()).collect(),
        prep_time,
        cook_time,
        servings,
    }
}

const GROUPS: &[KeywordGroup] = &[
    KeywordGroup {
        keywords: &["frango", "chicken", "peito"],
        recipe: || {
            recipe(
                "frango-1",
                "Frango Grelhado com Temperos",
                &["500g de peito de frango", "Alho", "Cebola", "Temperos", "Azeite"],
                &["Tempere o frango", "Grelhe por 15 minutos", "Sirva quente"],
                (10, 15, 2),
            )
        },
    },
    KeywordGroup {
        keywords: &["ovo", "ovos", "egg"],
        recipe: || {
            recipe(
                "ovo-1",
                "Omelete de Legumes",
                &["3 ovos", "Cebola", "Tomate", "Temperos", "Azeite"],
                &["Bata os ovos", "Refogue os legumes", "Faça a omelete"],
                (5, 8, 1),
            )
        },
    },
    KeywordGroup {
        keywords: &["banana", "aveia", "oats"],
        recipe: || {
            recipe(
                "smoothie-1",
                "Smoothie Energético",
                &["1 banana", "2 colheres de aveia", "1 xícara de leite", "Mel"],
                &["Bata tudo no liquidificador", "Sirva gelado"],
                (3, 0, 1),
            )
        },
    },
    KeywordGroup {
        keywords: &["arroz", "rice"],
        recipe: || {
            recipe(
                "arroz-1",
                "Arroz Integral com Legumes",
                &["1 xícara de arroz integral", "Cenoura", "Brócolis", "Caldo de legumes"],
                &["Refogue os legumes", "Adicione arroz e caldo", "Cozinhe por 25 min"],
                (10, 25, 2),
            )
        },
    },
];

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Splits the comma separated input into trimmed, lowercased ingredients.
pub fn parse_ingredients(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|i| i.trim().to_lowercase())
        .filter(|i| !i.is_empty())
        .collect()
}

/// Recipe ideas for the ingredients a user has at hand.
pub fn suggest_recipes(input: &str) -> Result<Vec<Recipe>, CoreError> {
    let ingredients = parse_ingredients(input);
    if ingredients.is_empty() {
        return Err(CoreError::Invalid(
            "at least one ingredient is required".to_string(),
        ));
    }

    let matches: Vec<Recipe> = GROUPS
        .iter()
        .filter(|group| {
            group
                .keywords
                .iter()
                .any(|k| ingredients.iter().any(|i| i.contains(k)))
        })
        .map(|group| (group.recipe)())
        .take(MAX_SUGGESTIONS)
        .collect();

    if !matches.is_empty() {
        return Ok(matches);
    }

    let listed: Vec<String> = ingredients.iter().map(|i| capitalize(i)).collect();
    let listed: Vec<&str> = listed.iter().map(String::as_str).collect();

    Ok(vec![
        recipe(
            "generic-1",
            "Salada Completa",
            &listed,
            &["Lave e corte os ingredientes", "Misture tudo", "Tempere a gosto"],
            (10, 0, 1),
        ),
        recipe(
            "generic-2",
            "Refogado Nutritivo",
            &listed,
            &["Corte todos os ingredientes", "Refogue em fogo médio", "Tempere e sirva"],
            (8, 12, 2),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_keyword_groups() {
        let recipes = suggest_recipes("Peito de frango, arroz").unwrap();
        let names: Vec<&str> = recipes.iter().map(|r| r.meal_name.as_str()).collect();
        assert_eq!(names, vec!["Frango Grelhado com Temperos", "Arroz Integral com Legumes"]);
    }

    #[test]
    fn test_at_most_three_suggestions() {
        let recipes = suggest_recipes("frango, ovos, banana, arroz").unwrap();
        assert_eq!(recipes.len(), 3);
        assert_eq!(recipes[2].id, "smoothie-1");
    }

    #[test]
    fn test_generic_recipes_use_capitalized_input() {
        let recipes = suggest_recipes(" tomate , cebola,,").unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].meal_name, "Salada Completa");
        assert_eq!(recipes[0].ingredients, vec!["Tomate", "Cebola"]);
        assert_eq!(recipes[1].ingredients, recipes[0].ingredients);
    }

    #[test]
    fn test_blank_input_is_invalid() {
        assert!(matches!(suggest_recipes("  , "), Err(CoreError::Invalid(_))));
    }
}
