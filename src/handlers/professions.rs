use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::db::professions as profession_db;
use crate::errors::{AppError, Result};
use crate::models::professions::CreateProfession;

/// POST /profissoes/
pub async fn create_profession(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateProfession>,
) -> Result<HttpResponse> {
    let input = body.into_inner();
    input.validate()?;

    let profession = profession_db::insert_profession(db.get_ref(), input).await?;
    tracing::info!(profession_id = profession.id, "Profession created");

    Ok(HttpResponse::Created().json(profession))
}

/// GET /profissoes/
pub async fn list_professions(db: web::Data<DatabaseConnection>) -> Result<HttpResponse> {
    let professions = profession_db::get_all_professions(db.get_ref()).await?;
    if professions.is_empty() {
        return Err(AppError::not_found("Nenhuma profissão encontrada"));
    }
    Ok(HttpResponse::Ok().json(professions))
}
