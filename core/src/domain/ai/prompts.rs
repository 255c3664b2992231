use crate::domain::ai::value_objects::{
    CompletionRequest, GenerateRecipeInput, GenerateWeeklyMenuInput,
};

const NO_RESTRICTIONS: &str = "nenhuma restrição específica";

fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
}

const RECIPE_SYSTEM_PROMPT: &str = "Você é um nutricionista especializado em criar receitas personalizadas.
Suas receitas devem ser práticas, saudáveis e adaptadas aos objetivos e restrições do usuário.
Sempre forneça informações nutricionais estimadas (calorias, proteínas, carboidratos, gorduras).
Seja conciso mas detalhado nas instruções.";

const RECIPE_FORMAT: &str = r#"Formato da resposta:
{
  "name": "Nome da Receita",
  "description": "Breve descrição apetitosa",
  "prepTime": "15 min",
  "servings": 2,
  "difficulty": "Fácil",
  "ingredients": ["ingrediente 1", "ingrediente 2", ...],
  "instructions": ["passo 1", "passo 2", ...],
  "nutrition": {
    "calories": 400,
    "protein": "30g",
    "carbs": "45g",
    "fat": "12g"
  },
  "tags": ["tag1", "tag2"]
}"#;

const MENU_SYSTEM_PROMPT: &str = "Você é um nutricionista especializado em planejamento alimentar semanal.
Crie menus completos, equilibrados e adaptados aos objetivos e restrições do usuário.
Considere variedade, praticidade e adequação nutricional.
Sempre inclua café da manhã, almoço, jantar e 2 lanches para cada dia.";

const MENU_FORMAT: &str = r#"Formato da resposta JSON:
{
  "weeklyMenu": [
    {
      "day": "Segunda-feira",
      "meals": {
        "breakfast": { "name": "Nome", "calories": 400, "time": "10 min" },
        "morning_snack": { "name": "Nome", "calories": 150, "time": "5 min" },
        "lunch": { "name": "Nome", "calories": 600, "time": "30 min" },
        "afternoon_snack": { "name": "Nome", "calories": 150, "time": "5 min" },
        "dinner": { "name": "Nome", "calories": 500, "time": "25 min" }
      },
      "total_calories": 1800,
      "macros": { "protein": "120g", "carbs": "200g", "fat": "60g" }
    }
  ],
  "shopping_list": {
    "fruits": ["item 1", "item 2"],
    "vegetables": ["item 1", "item 2"],
    "proteins": ["item 1", "item 2"],
    "grains": ["item 1", "item 2"],
    "dairy": ["item 1", "item 2"],
    "others": ["item 1", "item 2"]
  },
  "tips": ["dica 1", "dica 2", "dica 3"]
}"#;

pub fn recipe_request(input: &GenerateRecipeInput) -> CompletionRequest {
    let user_prompt = format!(
        "Crie uma receita {} considerando:\n- Objetivo: {}\n- Preferências/Restrições: {}\n\n{}",
        or_default(&input.meal_type, "saudável"),
        or_default(&input.diet_goal, "manutenção"),
        or_default(&input.preferences, NO_RESTRICTIONS),
        RECIPE_FORMAT
    );

    CompletionRequest {
        system_prompt: RECIPE_SYSTEM_PROMPT.to_string(),
        user_prompt,
    }
}

pub fn weekly_menu_request(input: &GenerateWeeklyMenuInput) -> CompletionRequest {
    let user_prompt = format!(
        "Crie um cardápio semanal completo (7 dias) considerando:\n- Objetivo: {}\n- Orçamento: {}\n- Tempo disponível: {}\n- Preferências/Restrições: {}\n\n{}",
        or_default(&input.diet_goal, "manutenção"),
        or_default(&input.budget, "moderado"),
        or_default(&input.time_available, "médio"),
        or_default(&input.preferences, NO_RESTRICTIONS),
        MENU_FORMAT
    );

    CompletionRequest {
        system_prompt: MENU_SYSTEM_PROMPT.to_string(),
        user_prompt,
    }
}
