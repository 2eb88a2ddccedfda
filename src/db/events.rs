use sea_orm::*;

use super::{contains_ignore_case, non_blank};
use crate::models::events::{self, CreateEvent, EventFilter};

/// Insert a new event. The caller has already checked that the organizer exists.
pub async fn insert_event(
    db: &DatabaseConnection,
    input: CreateEvent,
) -> Result<events::Model, DbErr> {
    let new_event = events::ActiveModel {
        id: NotSet,
        organizer_id: Set(input.organizer_id),
        name: Set(input.name),
        event_date: Set(input.event_date),
        location: Set(input.location),
        description: Set(input.description),
    };

    new_event.insert(db).await
}

/// Fetch events matching the optional name substring and exact date, ordered by id.
pub async fn find_events(
    db: &DatabaseConnection,
    filter: &EventFilter,
) -> Result<Vec<events::Model>, DbErr> {
    let mut query = events::Entity::find();

    if let Some(name) = non_blank(filter.name.as_deref()) {
        query = query.filter(contains_ignore_case(
            (events::Entity, events::Column::Name),
            name,
        ));
    }
    if let Some(date) = filter.event_date {
        query = query.filter(events::Column::EventDate.eq(date));
    }

    query.order_by_asc(events::Column::Id).all(db).await
}

/// Fetch a single event by ID.
pub async fn get_event_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<events::Model>, DbErr> {
    events::Entity::find_by_id(id).one(db).await
}
