use utoipa::OpenApi;

use crate::application::http::{
    achievement::router::AchievementApiDoc, ai::router::AiApiDoc,
    challenge::router::{ChallengeApiDoc, DailyChallengeApiDoc}, dashboard::router::DashboardApiDoc,
    health::router::HealthApiDoc, menu::router::MenuApiDoc, profile::router::ProfileApiDoc,
    progress::router::ProgressApiDoc, questionnaire::router::QuestionnaireApiDoc,
    recipe::router::RecipeApiDoc, server::config::__path_get_config,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "WeekFit API"
    ),
    paths(get_config),
    nest(
        (path = "/questionnaire", api = QuestionnaireApiDoc),
        (path = "/menus", api = MenuApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/ai", api = AiApiDoc),
        (path = "/profile", api = ProfileApiDoc),
        (path = "/challenges", api = ChallengeApiDoc),
        (path = "/daily-challenges", api = DailyChallengeApiDoc),
        (path = "/achievements", api = AchievementApiDoc),
        (path = "/progress", api = ProgressApiDoc),
        (path = "/dashboard", api = DashboardApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
