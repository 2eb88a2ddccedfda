use sea_orm::*;

use super::{contains_ignore_case, non_blank};
use crate::db::professions as profession_db;
use crate::db::users as user_db;
use crate::errors::AppError;
use crate::models::freelancers::{self, CreateFreelancer, FreelancerResponse, UpdateFreelancer};
use crate::models::users::{self, NewUser, Role};

/// Register a freelancer: the user row and its profile row commit together or not at all.
pub async fn register_freelancer(
    db: &DatabaseConnection,
    input: CreateFreelancer,
) -> Result<FreelancerResponse, AppError> {
    let txn = db.begin().await?;

    if user_db::email_taken(&txn, &input.email).await? {
        return Err(AppError::Conflict("Email já registrado".to_string()));
    }
    if let Some(profession_id) = input.profession_id {
        ensure_profession_exists(&txn, profession_id).await?;
    }

    let user = user_db::insert_user(
        &txn,
        NewUser {
            name: input.name,
            email: input.email,
            password: input.password,
            phone: input.phone,
            document: input.document,
            role: Role::Freelancer,
        },
    )
    .await?;

    let profile = freelancers::ActiveModel {
        id: Set(user.id),
        specialty: Set(input.specialty),
        portfolio: Set(input.portfolio),
        average_rating: Set(0.0),
        profession_id: Set(input.profession_id),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    Ok(FreelancerResponse::merge(user, profile))
}

/// List freelancers joined with their user rows, optionally filtered by specialty substring.
pub async fn list_freelancers(
    db: &DatabaseConnection,
    specialty: Option<&str>,
) -> Result<Vec<FreelancerResponse>, DbErr> {
    let mut query = freelancers::Entity::find().find_also_related(users::Entity);

    if let Some(specialty) = non_blank(specialty) {
        query = query.filter(contains_ignore_case(
            (freelancers::Entity, freelancers::Column::Specialty),
            specialty,
        ));
    }

    let rows = query
        .order_by_asc(freelancers::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(profile, user)| user.map(|user| FreelancerResponse::merge(user, profile)))
        .collect())
}

/// Fetch a single freelancer profile by ID.
pub async fn get_freelancer_by_id<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<Option<freelancers::Model>, DbErr> {
    freelancers::Entity::find_by_id(id).one(db).await
}

/// Apply a partial update to a freelancer profile. Only fields present in `input` change;
/// an explicit `null` clears a nullable column.
pub async fn update_freelancer(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateFreelancer,
) -> Result<FreelancerResponse, AppError> {
    let (profile, user) = freelancers::Entity::find_by_id(id)
        .find_also_related(users::Entity)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("Freelancer não encontrado"))?;
    let user = user.ok_or_else(|| AppError::not_found("Freelancer não encontrado"))?;

    if let Some(Some(profession_id)) = input.profession_id {
        ensure_profession_exists(db, profession_id).await?;
    }

    let mut active: freelancers::ActiveModel = profile.into();

    if let Some(specialty) = input.specialty {
        active.specialty = Set(specialty);
    }
    if let Some(portfolio) = input.portfolio {
        active.portfolio = Set(portfolio);
    }
    if let Some(profession_id) = input.profession_id {
        active.profession_id = Set(profession_id);
    }

    let updated = if active.is_changed() {
        active.update(db).await?
    } else {
        active.try_into_model()?
    };

    Ok(FreelancerResponse::merge(user, updated))
}

/// Overwrite the stored average. Returns `None` when `id` has no freelancer profile.
pub async fn set_average_rating<C: ConnectionTrait>(
    db: &C,
    id: i32,
    average: f64,
) -> Result<Option<freelancers::Model>, DbErr> {
    let Some(profile) = get_freelancer_by_id(db, id).await? else {
        return Ok(None);
    };

    let mut active: freelancers::ActiveModel = profile.into();
    active.average_rating = Set(average);
    active.update(db).await.map(Some)
}

async fn ensure_profession_exists<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), AppError> {
    match profession_db::get_profession_by_id(db, id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::not_found(format!("Profissão {id} não encontrada"))),
    }
}
