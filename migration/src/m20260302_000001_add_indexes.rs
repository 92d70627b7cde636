use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Jobs {
    Table,
    UserId,
    CategoryId,
    CityId,
}

#[derive(DeriveIden)]
enum Reviews {
    Table,
    UserId,
    JobId,
}

#[derive(DeriveIden)]
enum Cities {
    Table,
    CountryId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on jobs.user_id for the owner-scoped job listing
        manager
            .create_index(
                Index::create()
                    .name("idx_jobs_user_id")
                    .table(Jobs::Table)
                    .col(Jobs::UserId)
                    .to_owned(),
            )
            .await?;

        // Index on jobs.category_id for the category id-list filter
        manager
            .create_index(
                Index::create()
                    .name("idx_jobs_category_id")
                    .table(Jobs::Table)
                    .col(Jobs::CategoryId)
                    .to_owned(),
            )
            .await?;

        // Index on jobs.city_id for the city id-list filter
        manager
            .create_index(
                Index::create()
                    .name("idx_jobs_city_id")
                    .table(Jobs::Table)
                    .col(Jobs::CityId)
                    .to_owned(),
            )
            .await?;

        // Index on reviews.user_id for the owner-scoped review listing
        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_user_id")
                    .table(Reviews::Table)
                    .col(Reviews::UserId)
                    .to_owned(),
            )
            .await?;

        // Index on reviews.job_id for fetching reviews by job
        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_job_id")
                    .table(Reviews::Table)
                    .col(Reviews::JobId)
                    .to_owned(),
            )
            .await?;

        // Index on cities.country_id for fetching cities by country
        manager
            .create_index(
                Index::create()
                    .name("idx_cities_country_id")
                    .table(Cities::Table)
                    .col(Cities::CountryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_jobs_user_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_jobs_category_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_jobs_city_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_reviews_user_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_reviews_job_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_cities_country_id").to_owned())
            .await?;

        Ok(())
    }
}
