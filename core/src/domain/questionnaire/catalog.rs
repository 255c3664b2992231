use crate::domain::questionnaire::entities::{Question, QuestionId, QuestionKind, QuestionOption};

pub const VEGETARIAN: &str = "vegetariano";
pub const VEGAN: &str = "vegano";
pub const LACTOSE_FREE: &str = "lactose";
pub const GLUTEN_FREE: &str = "gluten";
pub const DIABETIC: &str = "diabetico";

fn option(value: &str, label: &str, description: &str) -> QuestionOption {
    QuestionOption {
        value: value.to_string(),
        label: label.to_string(),
        description: description.to_string(),
    }
}

fn question(
    id: QuestionId,
    title: &str,
    subtitle: &str,
    kind: QuestionKind,
    options: Vec<QuestionOption>,
) -> Question {
    Question {
        id,
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        kind,
        options,
    }
}

/// The questionnaire steps, in the order they are asked.
pub fn questions() -> Vec<Question> {
    vec![
        question(
            QuestionId::Goal,
            "Qual é o seu objetivo principal?",
            "Vamos personalizar seu cardápio baseado no seu objetivo",
            QuestionKind::Single,
            vec![
                option("emagrecimento", "Emagrecimento", "Foco em déficit calórico"),
                option("bulking", "Ganho de Massa", "Foco em superávit calórico"),
                option("manutencao", "Manutenção", "Manter peso atual"),
                option("saude", "Vida Saudável", "Foco em nutrição balanceada"),
            ],
        ),
        question(
            QuestionId::Restrictions,
            "Possui alguma restrição alimentar?",
            "Selecione todas que se aplicam",
            QuestionKind::Multiple,
            vec![
                option(VEGETARIAN, "Vegetariano", ""),
                option(VEGAN, "Vegano", ""),
                option(LACTOSE_FREE, "Sem Lactose", ""),
                option(GLUTEN_FREE, "Sem Glúten", ""),
                option(DIABETIC, "Diabético", ""),
                option("nenhuma", "Nenhuma", ""),
            ],
        ),
        question(
            QuestionId::Budget,
            "Qual o seu orçamento semanal para alimentação?",
            "Vamos adequar as receitas ao seu bolso",
            QuestionKind::Single,
            vec![
                option("economico", "Até R$ 100", "Receitas econômicas"),
                option("moderado", "R$ 100 - R$ 200", "Bom custo-benefício"),
                option("confortavel", "R$ 200 - R$ 300", "Mais variedade"),
                option("premium", "Acima de R$ 300", "Ingredientes premium"),
            ],
        ),
        question(
            QuestionId::CookingTime,
            "Quanto tempo você tem para cozinhar?",
            "Receitas adaptadas à sua rotina",
            QuestionKind::Single,
            vec![
                option("rapido", "15-30 min", "Receitas rápidas"),
                option("moderado", "30-60 min", "Receitas balanceadas"),
                option("elaborado", "1h+", "Receitas elaboradas"),
                option("meal_prep", "Meal Prep", "Cozinhar tudo no domingo"),
            ],
        ),
        question(
            QuestionId::Experience,
            "Qual seu nível na cozinha?",
            "Receitas adequadas à sua experiência",
            QuestionKind::Single,
            vec![
                option("iniciante", "Iniciante", "Receitas bem simples"),
                option("intermediario", "Intermediário", "Alguma experiência"),
                option("avancado", "Avançado", "Gosto de desafios"),
            ],
        ),
        question(
            QuestionId::Cuisines,
            "Que tipo de culinária você prefere?",
            "Selecione suas favoritas",
            QuestionKind::Multiple,
            vec![
                option("brasileira", "Brasileira", ""),
                option("italiana", "Italiana", ""),
                option("asiatica", "Asiática", ""),
                option("mediterranea", "Mediterrânea", ""),
                option("mexicana", "Mexicana", ""),
                option("fit", "Fit/Light", ""),
            ],
        ),
        question(
            QuestionId::Meals,
            "Quais refeições quer no cardápio?",
            "Montaremos baseado na sua rotina",
            QuestionKind::Multiple,
            vec![
                option("cafe", "Café da Manhã", ""),
                option("almoco", "Almoço", ""),
                option("lanche", "Lanche da Tarde", ""),
                option("jantar", "Jantar", ""),
                option("ceia", "Ceia", ""),
            ],
        ),
    ]
}
