use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The role discriminator for a user. Stored as the literal the profile endpoints use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum Role {
    #[sea_orm(string_value = "Freelancer")]
    #[serde(rename = "Freelancer")]
    Freelancer,
    #[sea_orm(string_value = "Organizador")]
    #[serde(rename = "Organizador")]
    Organizer,
}

/// SeaORM entity for the `users` table.
///
/// Never serialized to clients directly; responses go through the
/// profile views in `freelancers` and `organizers`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub document: Option<String>,
    pub role: Role,
    pub registered_at: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::freelancers::Entity")]
    Freelancer,
    #[sea_orm(has_one = "super::organizers::Entity")]
    Organizer,
}

impl Related<super::freelancers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Freelancer.def()
    }
}

impl Related<super::organizers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organizer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Fields shared by both registration payloads.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub document: Option<String>,
    pub role: Role,
}
