use std::collections::HashMap;

use sea_orm::*;

use crate::error::ApiError;
use crate::models::PreSave;
use crate::models::team_roles;
use crate::models::teams::{self, CreateTeam, TeamResponse, UpdateTeam};

/// Base listing query: every team member, newest first.
pub fn all_ordered() -> Select<teams::Entity> {
    teams::Entity::find().order_by_desc(teams::Column::Id)
}

/// Insert a new team member.
pub async fn insert_team(
    db: &DatabaseConnection,
    input: CreateTeam,
) -> Result<teams::Model, ApiError> {
    if team_roles::Entity::find_by_id(input.role).one(db).await?.is_none() {
        return Err(ApiError::field("role", format!("Invalid role id: {}", input.role)));
    }

    let mut new_team = teams::ActiveModel {
        name: Set(input.name),
        description: Set(input.description),
        photo_url: Set(input.photo),
        role_id: Set(input.role),
        ..Default::default()
    };
    new_team.pre_save(true);

    Ok(new_team.insert(db).await?)
}

/// Fetch a single team member by ID.
pub async fn get_team_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<teams::Model>, DbErr> {
    teams::Entity::find_by_id(id).one(db).await
}

/// Update an existing team member. `Ok(None)` if the id does not exist.
pub async fn update_team(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateTeam,
) -> Result<Option<teams::Model>, ApiError> {
    let Some(team) = teams::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    if let Some(role) = input.role {
        if team_roles::Entity::find_by_id(role).one(db).await?.is_none() {
            return Err(ApiError::field("role", format!("Invalid role id: {role}")));
        }
    }

    let mut active: teams::ActiveModel = team.into();

    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(description) = input.description {
        active.description = Set(description);
    }
    if let Some(photo) = input.photo {
        active.photo_url = Set(Some(photo));
    }
    if let Some(role) = input.role {
        active.role_id = Set(role);
    }
    active.pre_save(false);

    Ok(active.update(db).await.map(Some)?)
}

/// Delete a team member by ID.
pub async fn delete_team(db: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
    teams::Entity::delete_by_id(id).exec(db).await
}

/// Resolve the role summaries for a batch of team rows with one lookup.
pub async fn to_responses(
    db: &DatabaseConnection,
    models: Vec<teams::Model>,
) -> Result<Vec<TeamResponse>, DbErr> {
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let role_ids: Vec<i32> = models.iter().map(|m| m.role_id).collect();
    let roles_by_id: HashMap<i32, team_roles::Model> = team_roles::Entity::find()
        .filter(team_roles::Column::Id.is_in(role_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|r| (r.id, r))
        .collect();

    Ok(models
        .into_iter()
        .map(|m| {
            let role = roles_by_id.get(&m.role_id).cloned();
            TeamResponse::from_model(m, role)
        })
        .collect())
}
