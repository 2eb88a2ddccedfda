use sea_orm::*;

use crate::models::proposals::{self, ProposalStatus};

#[derive(Debug, Clone)]
pub struct NewProposal {
    pub event_id: i32,
    pub freelancer_id: i32,
    pub proposed_on: chrono::NaiveDate,
    pub status: ProposalStatus,
}

/// Insert a new proposal. The caller has already checked the event and freelancer.
pub async fn insert_proposal(
    db: &DatabaseConnection,
    input: NewProposal,
) -> Result<proposals::Model, DbErr> {
    let new_proposal = proposals::ActiveModel {
        id: NotSet,
        event_id: Set(input.event_id),
        freelancer_id: Set(input.freelancer_id),
        proposed_on: Set(input.proposed_on),
        status: Set(input.status),
    };

    new_proposal.insert(db).await
}

/// Fetch a single proposal by ID.
pub async fn get_proposal_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<proposals::Model>, DbErr> {
    proposals::Entity::find_by_id(id).one(db).await
}

/// Fetch all proposals sent by one freelancer, ordered by id.
pub async fn get_proposals_by_freelancer(
    db: &DatabaseConnection,
    freelancer_id: i32,
) -> Result<Vec<proposals::Model>, DbErr> {
    proposals::Entity::find()
        .filter(proposals::Column::FreelancerId.eq(freelancer_id))
        .order_by_asc(proposals::Column::Id)
        .all(db)
        .await
}

/// Set the status of a proposal. Any status may replace any other.
pub async fn update_proposal_status(
    db: &DatabaseConnection,
    id: i32,
    status: ProposalStatus,
) -> Result<proposals::Model, DbErr> {
    let proposal = proposals::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Proposta não encontrada".to_string()))?;

    let mut active: proposals::ActiveModel = proposal.into();
    active.status = Set(status);

    active.update(db).await
}
