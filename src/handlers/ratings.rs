use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::db::ratings as rating_db;
use crate::db::users as user_db;
use crate::errors::{AppError, Result};
use crate::models::ratings::{CreateRating, RatingsQuery};

/// POST /avaliacoes/: rate a user and refresh their average.
///
/// The score is checked before any database access.
pub async fn create_rating(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateRating>,
) -> Result<HttpResponse> {
    let input = body.into_inner();
    input.validate()?;

    let rating = rating_db::create_rating(db.get_ref(), input).await?;
    tracing::info!(
        rating_id = rating.id,
        rater_id = rating.rater_id,
        rated_id = rating.rated_id,
        score = rating.score,
        "Rating recorded"
    );

    Ok(HttpResponse::Created().json(rating))
}

/// GET /avaliacoes/?userId=: ratings received by a user.
pub async fn get_ratings_by_user(
    db: web::Data<DatabaseConnection>,
    query: web::Query<RatingsQuery>,
) -> Result<HttpResponse> {
    let user_id = query.user_id;

    if user_db::get_user_by_id(db.get_ref(), user_id).await?.is_none() {
        return Err(AppError::not_found("Usuário não encontrado"));
    }

    let ratings = rating_db::get_ratings_for_user(db.get_ref(), user_id).await?;
    if ratings.is_empty() {
        return Err(AppError::not_found(
            "Nenhuma avaliação encontrada para este usuário",
        ));
    }
    Ok(HttpResponse::Ok().json(ratings))
}
