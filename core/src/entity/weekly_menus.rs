use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "weekly_menus")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub week_start: Date,
    #[sea_orm(column_type = "JsonBinary")]
    pub meals: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub recipes: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub shopping_list: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub ai_preferences: Json,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
