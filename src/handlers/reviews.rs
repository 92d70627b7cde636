use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::reviews as review_db;
use crate::error::ApiError;
use crate::models::reviews::{CreateReview, ReviewResponse, UpdateReview};
use crate::pagination::{self, PaginationQuery};
use crate::responses;
use crate::validation::validate_body;

/// GET /api/reviews — list the caller's reviews (requires authentication).
pub async fn list_reviews(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, ApiError> {
    let page = pagination::paginate(
        db.get_ref(),
        review_db::own_ordered(user.0.id),
        &query,
        ReviewResponse::from,
    )
    .await?;

    Ok(responses::success(page))
}

/// POST /api/reviews — create a review (requires authentication).
pub async fn create_review(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input: CreateReview = validate_body(body.into_inner())?;
    input.validate()?;

    let review = review_db::insert_review(db.get_ref(), input, user.0.id).await?;

    Ok(responses::created(ReviewResponse::from(review)))
}

/// GET /api/reviews/{id} — get a single review.
pub async fn get_review(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let review = review_db::get_review_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::not_found("Review", id))?;

    Ok(responses::success(ReviewResponse::from(review)))
}

/// PUT /api/reviews/{id} — update a review.
pub async fn update_review(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let input: UpdateReview = validate_body(body.into_inner())?;
    input.validate()?;

    let updated = review_db::update_review(db.get_ref(), id, input)
        .await?
        .ok_or_else(|| ApiError::not_found("Review", id))?;

    Ok(responses::success(ReviewResponse::from(updated)))
}

/// DELETE /api/reviews/{id} — delete a review.
pub async fn delete_review(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let result = review_db::delete_review(db.get_ref(), id).await?;

    if result.rows_affected > 0 {
        Ok(responses::deleted("Successfully deleted"))
    } else {
        Err(ApiError::not_found("Review", id))
    }
}
