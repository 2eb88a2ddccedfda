use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::db::freelancers as freelancer_db;
use crate::errors::{AppError, Result};
use crate::models::freelancers::{CreateFreelancer, FreelancerListQuery, UpdateFreelancer};

/// POST /freelancers/: register a user with a freelancer profile.
///
/// Answers 400 when the email is already registered; no row is written in that case.
pub async fn create_freelancer(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateFreelancer>,
) -> Result<HttpResponse> {
    let input = body.into_inner();
    input.validate()?;

    let freelancer = freelancer_db::register_freelancer(db.get_ref(), input).await?;
    tracing::info!(user_id = freelancer.id, "Freelancer registered");

    Ok(HttpResponse::Created().json(freelancer))
}

/// GET /freelancers/?especialidade=: list freelancers, optionally by specialty substring.
pub async fn list_freelancers(
    db: web::Data<DatabaseConnection>,
    query: web::Query<FreelancerListQuery>,
) -> Result<HttpResponse> {
    let freelancers =
        freelancer_db::list_freelancers(db.get_ref(), query.specialty.as_deref()).await?;

    if freelancers.is_empty() {
        return Err(AppError::not_found("Nenhum freelancer encontrado"));
    }
    Ok(HttpResponse::Ok().json(freelancers))
}

/// PUT /freelancers/{id}: partial update of specialty, portfolio and profession.
pub async fn update_freelancer(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    body: web::Json<UpdateFreelancer>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let input = body.into_inner();
    input.validate()?;

    let updated = freelancer_db::update_freelancer(db.get_ref(), id, input).await?;
    tracing::info!(user_id = id, "Freelancer profile updated");

    Ok(HttpResponse::Ok().json(updated))
}
