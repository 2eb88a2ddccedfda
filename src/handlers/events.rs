use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::db::events as event_db;
use crate::db::organizers as organizer_db;
use crate::errors::{AppError, Result};
use crate::models::events::{CreateEvent, EventFilter};

/// GET /eventos/?nome=&data_evento=: list events.
///
/// An empty result is answered with 404, not an empty list.
pub async fn list_events(
    db: web::Data<DatabaseConnection>,
    query: web::Query<EventFilter>,
) -> Result<HttpResponse> {
    let events = event_db::find_events(db.get_ref(), &query).await?;

    if events.is_empty() {
        return Err(AppError::not_found("Nenhum evento encontrado"));
    }
    Ok(HttpResponse::Ok().json(events))
}

/// POST /eventos/: create an event owned by an existing organizer.
pub async fn create_event(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateEvent>,
) -> Result<HttpResponse> {
    let input = body.into_inner();
    input.validate()?;

    if organizer_db::get_organizer_by_id(db.get_ref(), input.organizer_id)
        .await?
        .is_none()
    {
        return Err(AppError::not_found("Organizador não encontrado"));
    }

    let event = event_db::insert_event(db.get_ref(), input).await?;
    tracing::info!(event_id = event.id, organizer_id = event.organizer_id, "Event created");

    Ok(HttpResponse::Created().json(event))
}
