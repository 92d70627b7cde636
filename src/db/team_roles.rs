use sea_orm::*;

use crate::models::team_roles::{self, CreateTeamRole, UpdateTeamRole};

/// Base listing query: every team role, newest first.
pub fn all_ordered() -> Select<team_roles::Entity> {
    team_roles::Entity::find().order_by_desc(team_roles::Column::Id)
}

/// Insert a new team role.
pub async fn insert_team_role(
    db: &DatabaseConnection,
    input: CreateTeamRole,
) -> Result<team_roles::Model, DbErr> {
    let new_role = team_roles::ActiveModel {
        name: Set(input.name),
        ..Default::default()
    };

    new_role.insert(db).await
}

/// Fetch a single team role by ID.
pub async fn get_team_role_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<team_roles::Model>, DbErr> {
    team_roles::Entity::find_by_id(id).one(db).await
}

/// Update an existing team role. `Ok(None)` if the id does not exist.
pub async fn update_team_role(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateTeamRole,
) -> Result<Option<team_roles::Model>, DbErr> {
    let Some(role) = team_roles::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: team_roles::ActiveModel = role.into();

    if let Some(name) = input.name {
        active.name = Set(name);
    }

    active.update(db).await.map(Some)
}

/// Delete a team role by ID.
pub async fn delete_team_role(db: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
    team_roles::Entity::delete_by_id(id).exec(db).await
}
