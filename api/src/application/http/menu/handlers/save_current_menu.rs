use axum::extract::State;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use weekfit_core::domain::{
    menu::{
        entities::{LoadedMenu, WeeklyMenu, week_start_for},
        generator::ensure_recipes,
        ports::MenuService,
    },
    shopping_list::ShoppingList,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        menu::validators::SaveMenuValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SaveCurrentMenuResponse {
    pub data: LoadedMenu,
}

#[utoipa::path(
    put,
    path = "/current",
    tag = "menu",
    summary = "Save weekly menu",
    description = "Saves an edited menu as the caller's current one. Recipes and the shopping list are rebuilt from the meal names.",
    responses(
        (status = 201, body = SaveCurrentMenuResponse),
        (status = 422, description = "A meal has no name")
    ),
    request_body = SaveMenuValidator
)]
pub async fn save_current_menu(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<SaveMenuValidator>,
) -> Result<Response<SaveCurrentMenuResponse>, ApiError> {
    let week_start = payload
        .week_start
        .unwrap_or_else(|| week_start_for(Utc::now().date_naive()));

    let mut menu = WeeklyMenu::new(
        identity.id(),
        week_start,
        payload.meals,
        Vec::new(),
        ShoppingList::default(),
        serde_json::Value::Object(Default::default()),
    );
    ensure_recipes(&mut menu, payload.cooking_time.as_deref().unwrap_or_default());
    menu.rebuild_shopping_list();

    let saved = state.service.save_menu(identity, menu).await?;

    Ok(Response::Created(SaveCurrentMenuResponse { data: saved }))
}
