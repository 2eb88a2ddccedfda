use sea_orm::*;

use crate::models::users::{self, NewUser};

/// Insert a user row; the registration date is today's date.
pub async fn insert_user<C: ConnectionTrait>(db: &C, input: NewUser) -> Result<users::Model, DbErr> {
    let new_user = users::ActiveModel {
        id: NotSet,
        name: Set(input.name),
        email: Set(input.email),
        password: Set(input.password),
        phone: Set(input.phone),
        document: Set(input.document),
        role: Set(input.role),
        registered_at: Set(chrono::Utc::now().date_naive()),
    };

    new_user.insert(db).await
}

/// Fetch a single user by ID.
pub async fn get_user_by_id<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(id).one(db).await
}

pub async fn find_by_email<C: ConnectionTrait>(
    db: &C,
    email: &str,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(db)
        .await
}

pub async fn email_taken<C: ConnectionTrait>(db: &C, email: &str) -> Result<bool, DbErr> {
    Ok(find_by_email(db, email).await?.is_some())
}

/// Fetch a user and hold a row lock on it until the surrounding transaction ends.
///
/// SQLite has no row locks; its database-level write lock is relied on instead.
pub async fn lock_user<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<users::Model>, DbErr> {
    let query = users::Entity::find_by_id(id);
    let query = match db.get_database_backend() {
        DbBackend::Sqlite => query,
        _ => query.lock_exclusive(),
    };
    query.one(db).await
}
