use sea_orm::entity::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};

use super::users;

/// SeaORM entity for the `freelancers` table. The primary key is the owning user's id.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "freelancers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub specialty: String,
    pub portfolio: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub average_rating: f64,
    pub profession_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::Id",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::professions::Entity",
        from = "Column::ProfessionId",
        to = "super::professions::Column::Id"
    )]
    Profession,
    #[sea_orm(has_many = "super::proposals::Entity")]
    Proposals,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::professions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profession.def()
    }
}

impl Related<super::proposals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Proposals.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for `POST /freelancers/`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFreelancer {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
    #[serde(rename = "documento", default)]
    pub document: Option<String>,
    #[serde(rename = "especialidade")]
    pub specialty: String,
    #[serde(default)]
    pub portfolio: Option<String>,
    #[serde(rename = "profissao_id", default)]
    pub profession_id: Option<i32>,
}

/// Request body for `PUT /freelancers/{id}`. Absent fields are left untouched.
///
/// The nullable columns use a double option: `None` when the key is absent,
/// `Some(None)` for an explicit `null`, which clears the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFreelancer {
    #[serde(rename = "especialidade")]
    pub specialty: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub portfolio: Option<Option<String>>,
    #[serde(rename = "profissao_id", default, deserialize_with = "present")]
    pub profession_id: Option<Option<i32>>,
}

/// Marks a key that appeared in the body, even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Deserialize)]
pub struct FreelancerListQuery {
    #[serde(rename = "especialidade")]
    pub specialty: Option<String>,
}

/// The merged user + freelancer profile returned by every freelancer endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreelancerResponse {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    #[serde(rename = "documento")]
    pub document: Option<String>,
    #[serde(rename = "especialidade")]
    pub specialty: String,
    pub portfolio: Option<String>,
    #[serde(rename = "avaliacao_media")]
    pub average_rating: f64,
    #[serde(rename = "profissao_id")]
    pub profession_id: Option<i32>,
}

impl FreelancerResponse {
    pub fn merge(user: users::Model, profile: Model) -> Self {
        Self {
            id: profile.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            document: user.document,
            specialty: profile.specialty,
            portfolio: profile.portfolio,
            average_rating: profile.average_rating,
            profession_id: profile.profession_id,
        }
    }
}
