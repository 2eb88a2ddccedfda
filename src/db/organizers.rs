use sea_orm::*;

use crate::db::users as user_db;
use crate::errors::AppError;
use crate::models::organizers::{self, CreateOrganizer, OrganizerResponse};
use crate::models::users::{NewUser, Role};

/// Register an organizer: the user row and its profile row commit together or not at all.
pub async fn register_organizer(
    db: &DatabaseConnection,
    input: CreateOrganizer,
) -> Result<OrganizerResponse, AppError> {
    let txn = db.begin().await?;

    if user_db::email_taken(&txn, &input.email).await? {
        return Err(AppError::Conflict("Email já registrado".to_string()));
    }

    let user = user_db::insert_user(
        &txn,
        NewUser {
            name: input.name,
            email: input.email,
            password: input.password,
            phone: input.phone,
            document: input.document,
            role: Role::Organizer,
        },
    )
    .await?;

    let profile = organizers::ActiveModel {
        id: Set(user.id),
        company_name: Set(input.company_name),
        average_rating: Set(0.0),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    Ok(OrganizerResponse::merge(user, profile))
}

/// Fetch a single organizer profile by ID.
pub async fn get_organizer_by_id<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<Option<organizers::Model>, DbErr> {
    organizers::Entity::find_by_id(id).one(db).await
}

/// Overwrite the stored average. Returns `None` when `id` has no organizer profile.
pub async fn set_average_rating<C: ConnectionTrait>(
    db: &C,
    id: i32,
    average: f64,
) -> Result<Option<organizers::Model>, DbErr> {
    let Some(profile) = get_organizer_by_id(db, id).await? else {
        return Ok(None);
    };

    let mut active: organizers::ActiveModel = profile.into();
    active.average_rating = Set(average);
    active.update(db).await.map(Some)
}
