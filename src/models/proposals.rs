use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Proposal lifecycle status. Any of the four may follow any other.
///
/// Stored and serialized with the Portuguese literals; the English names are
/// accepted on input as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum ProposalStatus {
    #[sea_orm(string_value = "Pendente")]
    #[serde(rename = "Pendente", alias = "Pending")]
    Pending,
    #[sea_orm(string_value = "Aceita")]
    #[serde(rename = "Aceita", alias = "Accepted")]
    Accepted,
    #[sea_orm(string_value = "Recusada")]
    #[serde(rename = "Recusada", alias = "Declined")]
    Declined,
    #[sea_orm(string_value = "Cancelada")]
    #[serde(rename = "Cancelada", alias = "Cancelled")]
    Cancelled,
}

impl ProposalStatus {
    pub const ALL: [ProposalStatus; 4] = [
        ProposalStatus::Pending,
        ProposalStatus::Accepted,
        ProposalStatus::Declined,
        ProposalStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalStatus::Pending => "Pendente",
            ProposalStatus::Accepted => "Aceita",
            ProposalStatus::Declined => "Recusada",
            ProposalStatus::Cancelled => "Cancelada",
        }
    }

    fn english(&self) -> &'static str {
        match self {
            ProposalStatus::Pending => "Pending",
            ProposalStatus::Accepted => "Accepted",
            ProposalStatus::Declined => "Declined",
            ProposalStatus::Cancelled => "Cancelled",
        }
    }

    /// Comma-separated list of the accepted literals, for error messages.
    pub fn allowed() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl FromStr for ProposalStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s || status.english() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// SeaORM entity for the `proposals` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "proposals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(rename = "evento_id")]
    pub event_id: i32,
    pub freelancer_id: i32,
    #[serde(rename = "data_proposta")]
    pub proposed_on: Date,
    pub status: ProposalStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::events::Entity",
        from = "Column::EventId",
        to = "super::events::Column::Id"
    )]
    Event,
    #[sea_orm(
        belongs_to = "super::freelancers::Entity",
        from = "Column::FreelancerId",
        to = "super::freelancers::Column::Id"
    )]
    Freelancer,
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::freelancers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Freelancer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for `POST /propostas/`.
///
/// `status` is kept as raw text so an unknown literal can be answered with a
/// message listing the allowed ones.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProposal {
    #[serde(rename = "evento_id")]
    pub event_id: i32,
    pub freelancer_id: i32,
    #[serde(rename = "data_proposta", default)]
    pub proposed_on: Option<Date>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProposalStatus {
    pub status: String,
}
