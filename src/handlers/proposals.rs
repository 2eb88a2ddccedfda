use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::db::events as event_db;
use crate::db::freelancers as freelancer_db;
use crate::db::proposals::{self as proposal_db, NewProposal};
use crate::errors::{AppError, Result};
use crate::models::proposals::{CreateProposal, ProposalStatus, UpdateProposalStatus};

fn parse_status(raw: &str) -> Result<ProposalStatus> {
    raw.parse().map_err(|_| {
        AppError::invalid(format!(
            "Status inválido. Valores permitidos: {}",
            ProposalStatus::allowed()
        ))
    })
}

/// POST /propostas/: a freelancer offers to work an event.
///
/// The event and the freelancer must both exist. Status defaults to Pending.
pub async fn create_proposal(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateProposal>,
) -> Result<HttpResponse> {
    let input = body.into_inner();

    let status = match input.status.as_deref() {
        Some(raw) => parse_status(raw)?,
        None => ProposalStatus::Pending,
    };

    if event_db::get_event_by_id(db.get_ref(), input.event_id)
        .await?
        .is_none()
    {
        return Err(AppError::not_found("Evento não encontrado"));
    }
    if freelancer_db::get_freelancer_by_id(db.get_ref(), input.freelancer_id)
        .await?
        .is_none()
    {
        return Err(AppError::not_found("Freelancer não encontrado"));
    }

    let proposal = proposal_db::insert_proposal(
        db.get_ref(),
        NewProposal {
            event_id: input.event_id,
            freelancer_id: input.freelancer_id,
            proposed_on: input
                .proposed_on
                .unwrap_or_else(|| chrono::Utc::now().date_naive()),
            status,
        },
    )
    .await?;
    tracing::info!(
        proposal_id = proposal.id,
        event_id = proposal.event_id,
        freelancer_id = proposal.freelancer_id,
        "Proposal sent"
    );

    Ok(HttpResponse::Created().json(proposal))
}

/// PATCH /propostas/{id}: move a proposal to any of the allowed statuses.
///
/// An unknown proposal is 404; an unknown status is 400 and leaves the row untouched.
pub async fn update_status(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    body: web::Json<UpdateProposalStatus>,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    if proposal_db::get_proposal_by_id(db.get_ref(), id)
        .await?
        .is_none()
    {
        return Err(AppError::not_found("Proposta não encontrada"));
    }
    let status = parse_status(&body.status)?;

    let updated = proposal_db::update_proposal_status(db.get_ref(), id, status).await?;
    tracing::info!(proposal_id = id, status = %updated.status, "Proposal status updated");

    Ok(HttpResponse::Ok().json(updated))
}

/// GET /propostas/freelancer/{id}: every proposal sent by a freelancer.
pub async fn get_proposals_by_freelancer(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let freelancer_id = path.into_inner();

    if freelancer_db::get_freelancer_by_id(db.get_ref(), freelancer_id)
        .await?
        .is_none()
    {
        return Err(AppError::not_found("Freelancer não encontrado"));
    }

    let proposals = proposal_db::get_proposals_by_freelancer(db.get_ref(), freelancer_id).await?;
    if proposals.is_empty() {
        return Err(AppError::not_found(
            "Nenhuma proposta encontrada para este freelancer",
        ));
    }
    Ok(HttpResponse::Ok().json(proposals))
}
