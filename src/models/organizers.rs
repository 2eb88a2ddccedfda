use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::users;

/// SeaORM entity for the `organizers` table. The primary key is the owning user's id.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "organizers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub company_name: String,
    #[sea_orm(column_type = "Double")]
    pub average_rating: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::Id",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::events::Entity")]
    Events,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Events.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for `POST /organizadores/`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrganizer {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
    #[serde(rename = "documento", default)]
    pub document: Option<String>,
    #[serde(rename = "empresa_evento")]
    pub company_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizerResponse {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    #[serde(rename = "documento")]
    pub document: Option<String>,
    #[serde(rename = "empresa_evento")]
    pub company_name: String,
    #[serde(rename = "avaliacao_media")]
    pub average_rating: f64,
}

impl OrganizerResponse {
    pub fn merge(user: users::Model, profile: Model) -> Self {
        Self {
            id: profile.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            document: user.document,
            company_name: profile.company_name,
            average_rating: profile.average_rating,
        }
    }
}
