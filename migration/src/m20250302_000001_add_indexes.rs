use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Events {
    Table,
    OrganizerId,
    EventDate,
}

#[derive(DeriveIden)]
enum Proposals {
    Table,
    EventId,
    FreelancerId,
}

#[derive(DeriveIden)]
enum Ratings {
    Table,
    RatedId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on events.organizer_id for fetching events by organizer
        manager
            .create_index(
                Index::create()
                    .name("idx_events_organizer_id")
                    .table(Events::Table)
                    .col(Events::OrganizerId)
                    .to_owned(),
            )
            .await?;

        // Index on events.event_date for the exact-date filter
        manager
            .create_index(
                Index::create()
                    .name("idx_events_event_date")
                    .table(Events::Table)
                    .col(Events::EventDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_proposals_event_id")
                    .table(Proposals::Table)
                    .col(Proposals::EventId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_proposals_freelancer_id")
                    .table(Proposals::Table)
                    .col(Proposals::FreelancerId)
                    .to_owned(),
            )
            .await?;

        // Average recomputation reads every rating received by one user
        manager
            .create_index(
                Index::create()
                    .name("idx_ratings_rated_id")
                    .table(Ratings::Table)
                    .col(Ratings::RatedId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_events_organizer_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_events_event_date").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_proposals_event_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_proposals_freelancer_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_ratings_rated_id").to_owned())
            .await?;

        Ok(())
    }
}
