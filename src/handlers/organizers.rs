use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::db::organizers as organizer_db;
use crate::errors::Result;
use crate::models::organizers::CreateOrganizer;

/// POST /organizadores/: register a user with an organizer profile.
pub async fn create_organizer(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateOrganizer>,
) -> Result<HttpResponse> {
    let input = body.into_inner();
    input.validate()?;

    let organizer = organizer_db::register_organizer(db.get_ref(), input).await?;
    tracing::info!(user_id = organizer.id, "Organizer registered");

    Ok(HttpResponse::Created().json(organizer))
}
