use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `optional_fields` table and its columns.
#[derive(DeriveIden)]
enum OptionalFields {
    Table,
    Id,
    Name,
    Key,
    FieldType,
    IsRequired,
    DefaultValue,
    MaxLength,
    MinLength,
    IsActive,
}

/// Identifiers for the `job_optional_values` table and its columns.
#[derive(DeriveIden)]
enum JobOptionalValues {
    Table,
    Id,
    JobId,
    OptionalFieldId,
    Value,
    ImageUrl,
    FileUrl,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Jobs {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OptionalFields::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OptionalFields::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OptionalFields::Name).string_len(30).not_null())
                    .col(ColumnDef::new(OptionalFields::Key).string_len(12).not_null())
                    .col(ColumnDef::new(OptionalFields::FieldType).string().not_null())
                    .col(ColumnDef::new(OptionalFields::IsRequired).boolean().not_null())
                    .col(ColumnDef::new(OptionalFields::DefaultValue).text().null())
                    .col(ColumnDef::new(OptionalFields::MaxLength).integer().null())
                    .col(ColumnDef::new(OptionalFields::MinLength).integer().null())
                    .col(ColumnDef::new(OptionalFields::IsActive).boolean().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(JobOptionalValues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobOptionalValues::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JobOptionalValues::JobId).integer().not_null())
                    .col(
                        ColumnDef::new(JobOptionalValues::OptionalFieldId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(JobOptionalValues::Value).text().null())
                    .col(ColumnDef::new(JobOptionalValues::ImageUrl).string().null())
                    .col(ColumnDef::new(JobOptionalValues::FileUrl).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_optional_values_job_id")
                            .from(JobOptionalValues::Table, JobOptionalValues::JobId)
                            .to(Jobs::Table, Jobs::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_optional_values_optional_field_id")
                            .from(JobOptionalValues::Table, JobOptionalValues::OptionalFieldId)
                            .to(OptionalFields::Table, OptionalFields::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JobOptionalValues::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OptionalFields::Table).to_owned())
            .await
    }
}
