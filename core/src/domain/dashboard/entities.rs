use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{challenge::entities::Challenge, menu::entities::LoadedMenu, profile::entities::Profile};

/// Everything the home screen shows in one payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Dashboard {
    pub profile: Profile,
    pub challenges: Vec<Challenge>,
    pub menu: LoadedMenu,
    pub next_level_points: i32,
    pub points_to_next_level: i32,
}
