use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `team_roles` table and its columns.
#[derive(DeriveIden)]
enum TeamRoles {
    Table,
    Id,
    Name,
}

/// Identifiers for the `teams` table and its columns.
#[derive(DeriveIden)]
enum Teams {
    Table,
    Id,
    Name,
    Description,
    PhotoUrl,
    RoleId,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamRoles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeamRoles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TeamRoles::Name).string_len(100).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teams::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Teams::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Teams::Description).text().not_null())
                    .col(ColumnDef::new(Teams::PhotoUrl).string().null())
                    .col(ColumnDef::new(Teams::RoleId).integer().not_null())
                    .col(
                        ColumnDef::new(Teams::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Teams::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teams_role_id")
                            .from(Teams::Table, Teams::RoleId)
                            .to(TeamRoles::Table, TeamRoles::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Teams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeamRoles::Table).to_owned())
            .await
    }
}
