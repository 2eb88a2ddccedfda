use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `ratings` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ratings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(rename = "avaliador_id")]
    pub rater_id: i32,
    #[serde(rename = "avaliado_id")]
    pub rated_id: i32,
    #[serde(rename = "nota")]
    pub score: i32,
    #[sea_orm(column_type = "Text", nullable)]
    #[serde(rename = "comentario")]
    pub comment: Option<String>,
    #[serde(rename = "data_avaliacao")]
    pub rated_on: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::RaterId",
        to = "super::users::Column::Id"
    )]
    Rater,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::RatedId",
        to = "super::users::Column::Id"
    )]
    Rated,
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRating {
    #[serde(rename = "avaliador_id")]
    pub rater_id: i32,
    #[serde(rename = "avaliado_id")]
    pub rated_id: i32,
    #[serde(rename = "nota")]
    pub score: i32,
    #[serde(rename = "comentario", default)]
    pub comment: Option<String>,
    #[serde(rename = "data_avaliacao", default)]
    pub rated_on: Option<Date>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RatingsQuery {
    #[serde(rename = "userId")]
    pub user_id: i32,
}
