use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::db::categories as category_db;
use crate::error::ApiError;
use crate::models::categories::{CategoryResponse, CreateCategory, UpdateCategory};
use crate::pagination::{self, PaginationQuery};
use crate::responses;
use crate::validation::validate_body;

/// GET /api/categories — list categories, newest first.
pub async fn list_categories(
    db: web::Data<DatabaseConnection>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, ApiError> {
    let page = pagination::paginate(
        db.get_ref(),
        category_db::all_ordered(),
        &query,
        CategoryResponse::from,
    )
    .await?;

    Ok(responses::success(page))
}

/// POST /api/categories — create a category.
pub async fn create_category(
    db: web::Data<DatabaseConnection>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input: CreateCategory = validate_body(body.into_inner())?;
    let category = category_db::insert_category(db.get_ref(), input).await?;

    Ok(responses::created(CategoryResponse::from(category)))
}

/// GET /api/categories/{id} — get a single category.
pub async fn get_category(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let category = category_db::get_category_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::not_found("Category", id))?;

    Ok(responses::success(CategoryResponse::from(category)))
}

/// PUT /api/categories/{id} — update a category.
pub async fn update_category(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let input: UpdateCategory = validate_body(body.into_inner())?;
    let updated = category_db::update_category(db.get_ref(), id, input)
        .await?
        .ok_or_else(|| ApiError::not_found("Category", id))?;

    Ok(responses::success(CategoryResponse::from(updated)))
}

/// DELETE /api/categories/{id} — delete a category.
pub async fn delete_category(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let result = category_db::delete_category(db.get_ref(), id).await?;

    if result.rows_affected > 0 {
        Ok(responses::deleted("Successfully deleted"))
    } else {
        Err(ApiError::not_found("Category", id))
    }
}
