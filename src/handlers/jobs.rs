use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::jobs as job_db;
use crate::error::ApiError;
use crate::models::jobs::{CreateJob, JobFilter};
use crate::pagination::PaginationQuery;
use crate::responses;
use crate::validation::validate_body;

/// GET /api/jobs — list the caller's jobs (requires authentication).
/// Query params: ?title=...&category=1,2&city=3&page=1&page_size=20
pub async fn list_jobs(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    filter: web::Query<JobFilter>,
    pagination: web::Query<PaginationQuery>,
) -> Result<HttpResponse, ApiError> {
    let page = job_db::list_jobs(db.get_ref(), user.0.id, &filter, &pagination).await?;

    Ok(responses::success(page))
}

/// POST /api/jobs — create a job ad (requires authentication).
pub async fn create_job(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input: CreateJob = validate_body(body.into_inner())?;
    input.validate()?;

    let job = job_db::insert_job(db.get_ref(), input, user.0.id).await?;

    Ok(responses::created(job))
}
