use sea_orm::*;

use crate::error::ApiError;
use crate::models::PreSave;
use crate::models::jobs;
use crate::models::reviews::{self, CreateReview, UpdateReview};

/// Base listing query: the caller's reviews, newest first.
pub fn own_ordered(user_id: i32) -> Select<reviews::Entity> {
    reviews::Entity::find()
        .filter(reviews::Column::UserId.eq(user_id))
        .order_by_desc(reviews::Column::Id)
}

/// Insert a new review for an existing job.
pub async fn insert_review(
    db: &DatabaseConnection,
    input: CreateReview,
    user_id: i32,
) -> Result<reviews::Model, ApiError> {
    if jobs::Entity::find_by_id(input.job).one(db).await?.is_none() {
        return Err(ApiError::field("job", format!("Invalid job id: {}", input.job)));
    }

    let mut new_review = reviews::ActiveModel {
        job_id: Set(input.job),
        user_id: Set(user_id),
        rating: Set(input.rating),
        description: Set(input.description),
        first_name: Set(input.first_name),
        email: Set(input.email),
        ..Default::default()
    };
    new_review.pre_save(true);

    Ok(new_review.insert(db).await?)
}

/// Fetch a single review by ID.
pub async fn get_review_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<reviews::Model>, DbErr> {
    reviews::Entity::find_by_id(id).one(db).await
}

/// Update an existing review. `Ok(None)` if the id does not exist.
pub async fn update_review(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateReview,
) -> Result<Option<reviews::Model>, ApiError> {
    let Some(review) = reviews::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    if let Some(job) = input.job {
        if jobs::Entity::find_by_id(job).one(db).await?.is_none() {
            return Err(ApiError::field("job", format!("Invalid job id: {job}")));
        }
    }

    let mut active: reviews::ActiveModel = review.into();

    if let Some(job) = input.job {
        active.job_id = Set(job);
    }
    if let Some(rating) = input.rating {
        active.rating = Set(rating);
    }
    if let Some(description) = input.description {
        active.description = Set(description);
    }
    if let Some(first_name) = input.first_name {
        active.first_name = Set(first_name);
    }
    if let Some(email) = input.email {
        active.email = Set(email);
    }
    active.pre_save(false);

    Ok(active.update(db).await.map(Some)?)
}

/// Delete a review by ID.
pub async fn delete_review(db: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
    reviews::Entity::delete_by_id(id).exec(db).await
}
