use sea_orm::*;

use crate::models::professions::{self, CreateProfession};

pub async fn insert_profession(
    db: &DatabaseConnection,
    input: CreateProfession,
) -> Result<professions::Model, DbErr> {
    let new_profession = professions::ActiveModel {
        id: NotSet,
        name: Set(input.name),
        description: Set(input.description),
    };

    new_profession.insert(db).await
}

/// Fetch all professions, ordered by id.
pub async fn get_all_professions(
    db: &DatabaseConnection,
) -> Result<Vec<professions::Model>, DbErr> {
    professions::Entity::find()
        .order_by_asc(professions::Column::Id)
        .all(db)
        .await
}

pub async fn get_profession_by_id<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<Option<professions::Model>, DbErr> {
    professions::Entity::find_by_id(id).one(db).await
}
