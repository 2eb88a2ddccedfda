use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `freelancers` table and its columns.
///
/// `id` is both the primary key and a foreign key to `users.id`.
#[derive(DeriveIden)]
enum Freelancers {
    Table,
    Id,
    Specialty,
    Portfolio,
    AverageRating,
    ProfessionId,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Professions {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Freelancers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Freelancers::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Freelancers::Specialty).string_len(255).not_null())
                    .col(ColumnDef::new(Freelancers::Portfolio).string_len(255).null())
                    .col(
                        ColumnDef::new(Freelancers::AverageRating)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Freelancers::ProfessionId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_freelancers_user_id")
                            .from(Freelancers::Table, Freelancers::Id)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_freelancers_profession_id")
                            .from(Freelancers::Table, Freelancers::ProfessionId)
                            .to(Professions::Table, Professions::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Freelancers::Table).to_owned())
            .await
    }
}
