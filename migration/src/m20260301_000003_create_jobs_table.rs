use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `jobs` table and its columns.
#[derive(DeriveIden)]
enum Jobs {
    Table,
    Id,
    Title,
    CategoryId,
    CityId,
    Description,
    ContactNumber,
    Email,
    Name,
    UserId,
    Status,
    PhotoUrl,
    IsVip,
    IsTop,
    CreatedAt,
    UpdatedAt,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Cities {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Jobs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Jobs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Jobs::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Jobs::CategoryId).integer().not_null())
                    .col(ColumnDef::new(Jobs::CityId).integer().not_null())
                    .col(ColumnDef::new(Jobs::Description).text().not_null())
                    .col(ColumnDef::new(Jobs::ContactNumber).string_len(18).not_null())
                    .col(ColumnDef::new(Jobs::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Jobs::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Jobs::UserId).integer().not_null())
                    .col(ColumnDef::new(Jobs::Status).string().not_null())
                    .col(ColumnDef::new(Jobs::PhotoUrl).string().null())
                    .col(ColumnDef::new(Jobs::IsVip).boolean().not_null())
                    .col(ColumnDef::new(Jobs::IsTop).boolean().not_null())
                    .col(
                        ColumnDef::new(Jobs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Jobs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_jobs_category_id")
                            .from(Jobs::Table, Jobs::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_jobs_city_id")
                            .from(Jobs::Table, Jobs::CityId)
                            .to(Cities::Table, Cities::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_jobs_user_id")
                            .from(Jobs::Table, Jobs::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Jobs::Table).to_owned())
            .await
    }
}
