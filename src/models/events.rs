use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `events` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(rename = "organizador_id")]
    pub organizer_id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "data_evento")]
    pub event_date: Date,
    #[serde(rename = "local")]
    pub location: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    #[serde(rename = "descricao")]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organizers::Entity",
        from = "Column::OrganizerId",
        to = "super::organizers::Column::Id"
    )]
    Organizer,
    #[sea_orm(has_many = "super::proposals::Entity")]
    Proposals,
}

impl Related<super::organizers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organizer.def()
    }
}

impl Related<super::proposals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Proposals.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    #[serde(rename = "organizador_id")]
    pub organizer_id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "data_evento")]
    pub event_date: Date,
    #[serde(rename = "local", default)]
    pub location: Option<String>,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
}

/// Query string for `GET /eventos/`. An empty `nome` counts as no filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventFilter {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "data_evento")]
    pub event_date: Option<Date>,
}
