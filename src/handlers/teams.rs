use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::db::team_roles as role_db;
use crate::db::teams as team_db;
use crate::error::ApiError;
use crate::models::team_roles::{CreateTeamRole, TeamRoleResponse, UpdateTeamRole};
use crate::models::teams::{CreateTeam, TeamResponse, UpdateTeam};
use crate::pagination::{self, PaginationQuery};
use crate::responses;
use crate::validation::validate_body;

// ── Team roles ──

/// GET /api/team-roles — list team roles, newest first.
pub async fn list_team_roles(
    db: web::Data<DatabaseConnection>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, ApiError> {
    let page = pagination::paginate(
        db.get_ref(),
        role_db::all_ordered(),
        &query,
        TeamRoleResponse::from,
    )
    .await?;

    Ok(responses::success(page))
}

/// POST /api/team-roles — create a team role.
pub async fn create_team_role(
    db: web::Data<DatabaseConnection>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input: CreateTeamRole = validate_body(body.into_inner())?;
    let role = role_db::insert_team_role(db.get_ref(), input).await?;

    Ok(responses::created(TeamRoleResponse::from(role)))
}

/// GET /api/team-roles/{id} — get a single team role.
pub async fn get_team_role(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let role = role_db::get_team_role_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::not_found("Team role", id))?;

    Ok(responses::success(TeamRoleResponse::from(role)))
}

/// PUT /api/team-roles/{id} — update a team role.
pub async fn update_team_role(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let input: UpdateTeamRole = validate_body(body.into_inner())?;
    let updated = role_db::update_team_role(db.get_ref(), id, input)
        .await?
        .ok_or_else(|| ApiError::not_found("Team role", id))?;

    Ok(responses::success(TeamRoleResponse::from(updated)))
}

/// DELETE /api/team-roles/{id} — delete a team role.
pub async fn delete_team_role(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let result = role_db::delete_team_role(db.get_ref(), id).await?;

    if result.rows_affected > 0 {
        Ok(responses::deleted("Successfully deleted"))
    } else {
        Err(ApiError::not_found("Team role", id))
    }
}

// ── Teams ──

/// GET /api/teams — list team members with their roles, newest first.
pub async fn list_teams(
    db: web::Data<DatabaseConnection>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, ApiError> {
    let mut page = pagination::paginate(
        db.get_ref(),
        team_db::all_ordered(),
        &query,
        |model| model,
    )
    .await?;

    let models = std::mem::take(&mut page.items);
    let items = team_db::to_responses(db.get_ref(), models).await?;

    Ok(responses::success(page.with_items(items)))
}

/// POST /api/teams — create a team member.
pub async fn create_team(
    db: web::Data<DatabaseConnection>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input: CreateTeam = validate_body(body.into_inner())?;
    let team = team_db::insert_team(db.get_ref(), input).await?;
    let role = role_db::get_team_role_by_id(db.get_ref(), team.role_id).await?;

    Ok(responses::created(TeamResponse::from_model(team, role)))
}

/// GET /api/teams/{id} — get a single team member.
pub async fn get_team(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let team = team_db::get_team_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::not_found("Team", id))?;
    let role = role_db::get_team_role_by_id(db.get_ref(), team.role_id).await?;

    Ok(responses::success(TeamResponse::from_model(team, role)))
}

/// PUT /api/teams/{id} — update a team member.
pub async fn update_team(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let input: UpdateTeam = validate_body(body.into_inner())?;
    let updated = team_db::update_team(db.get_ref(), id, input)
        .await?
        .ok_or_else(|| ApiError::not_found("Team", id))?;
    let role = role_db::get_team_role_by_id(db.get_ref(), updated.role_id).await?;

    Ok(responses::success(TeamResponse::from_model(updated, role)))
}

/// DELETE /api/teams/{id} — delete a team member.
pub async fn delete_team(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let result = team_db::delete_team(db.get_ref(), id).await?;

    if result.rows_affected > 0 {
        Ok(responses::deleted("Successfully deleted"))
    } else {
        Err(ApiError::not_found("Team", id))
    }
}
