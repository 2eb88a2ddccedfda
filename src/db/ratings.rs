use sea_orm::*;

use crate::db::freelancers as freelancer_db;
use crate::db::organizers as organizer_db;
use crate::db::users as user_db;
use crate::errors::AppError;
use crate::models::ratings::{self, CreateRating};

/// Arithmetic mean of every score; `None` for an empty history.
pub fn average(scores: &[i32]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let sum: i64 = scores.iter().map(|&s| i64::from(s)).sum();
    Some(sum as f64 / scores.len() as f64)
}

/// Record a rating and recompute the rated user's average from their full history.
///
/// The rated user's row is locked first, so concurrent ratings for the same
/// user recompute one after another instead of overwriting each other.
pub async fn create_rating(
    db: &DatabaseConnection,
    input: CreateRating,
) -> Result<ratings::Model, AppError> {
    let txn = db.begin().await?;

    if user_db::get_user_by_id(&txn, input.rater_id).await?.is_none() {
        return Err(AppError::not_found("Avaliador não encontrado"));
    }
    if user_db::lock_user(&txn, input.rated_id).await?.is_none() {
        return Err(AppError::not_found("Avaliado não encontrado"));
    }

    let rating = ratings::ActiveModel {
        id: NotSet,
        rater_id: Set(input.rater_id),
        rated_id: Set(input.rated_id),
        score: Set(input.score),
        comment: Set(input.comment),
        rated_on: Set(input
            .rated_on
            .unwrap_or_else(|| chrono::Utc::now().date_naive())),
    }
    .insert(&txn)
    .await?;

    let scores = scores_received(&txn, input.rated_id).await?;
    if let Some(average) = average(&scores) {
        // Each user has one role, so at most one of these finds a profile.
        if freelancer_db::set_average_rating(&txn, input.rated_id, average)
            .await?
            .is_some()
        {
            tracing::debug!(user_id = input.rated_id, average, "Freelancer average updated");
        }
        if organizer_db::set_average_rating(&txn, input.rated_id, average)
            .await?
            .is_some()
        {
            tracing::debug!(user_id = input.rated_id, average, "Organizer average updated");
        }
    }

    txn.commit().await?;
    Ok(rating)
}

/// Fetch every rating a user has received, ordered by id.
pub async fn get_ratings_for_user(
    db: &DatabaseConnection,
    rated_id: i32,
) -> Result<Vec<ratings::Model>, DbErr> {
    ratings::Entity::find()
        .filter(ratings::Column::RatedId.eq(rated_id))
        .order_by_asc(ratings::Column::Id)
        .all(db)
        .await
}

async fn scores_received<C: ConnectionTrait>(db: &C, rated_id: i32) -> Result<Vec<i32>, DbErr> {
    let received = ratings::Entity::find()
        .filter(ratings::Column::RatedId.eq(rated_id))
        .all(db)
        .await?;
    Ok(received.into_iter().map(|r| r.score).collect())
}

#[cfg(test)]
mod tests {
    use super::average;

    #[test]
    fn average_of_full_history() {
        assert_eq!(average(&[5, 3, 4]), Some(4.0));
        assert_eq!(average(&[5]), Some(5.0));
        assert_eq!(average(&[1, 2]), Some(1.5));
    }

    #[test]
    fn empty_history_has_no_average() {
        assert_eq!(average(&[]), None);
    }
}
