use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::PreSave;
use crate::error::ApiError;
use crate::validation::ExpectedFields;

/// SeaORM entity for the `reviews` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub job_id: i32,
    pub user_id: i32,
    pub rating: i16,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub first_name: String,
    pub email: String,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::jobs::Entity",
        from = "Column::JobId",
        to = "super::jobs::Column::Id"
    )]
    Job,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::jobs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Job.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl PreSave for ActiveModel {
    fn pre_save(&mut self, inserting: bool) {
        if inserting {
            self.created_at = Set(chrono::Utc::now());
        } else {
            self.updated_at = Set(Some(chrono::Utc::now()));
        }
    }
}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub job: i32,
    pub rating: i16,
    #[serde(default)]
    pub description: String,
    pub first_name: String,
    pub email: String,
}

impl ExpectedFields for CreateReview {
    const FIELDS: &'static [&'static str] =
        &["job", "rating", "description", "first_name", "email"];
}

impl CreateReview {
    pub fn validate(&self) -> Result<(), ApiError> {
        if !(1..=5).contains(&self.rating) {
            return Err(ApiError::field("rating", "must be between 1 and 5"));
        }
        if !self.email.contains('@') {
            return Err(ApiError::field("email", "must be a valid email address"));
        }
        if self.first_name.is_empty() || self.first_name.len() > 50 {
            return Err(ApiError::field(
                "first_name",
                "must be between 1 and 50 characters",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReview {
    pub job: Option<i32>,
    pub rating: Option<i16>,
    pub description: Option<String>,
    pub first_name: Option<String>,
    pub email: Option<String>,
}

impl ExpectedFields for UpdateReview {
    const FIELDS: &'static [&'static str] =
        &["job", "rating", "description", "first_name", "email"];
}

impl UpdateReview {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(rating) = self.rating {
            if !(1..=5).contains(&rating) {
                return Err(ApiError::field("rating", "must be between 1 and 5"));
            }
        }
        if let Some(ref email) = self.email {
            if !email.contains('@') {
                return Err(ApiError::field("email", "must be a valid email address"));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    pub id: i32,
    pub job: i32,
    pub rating: i16,
    pub description: String,
    pub first_name: String,
    pub email: String,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

impl From<Model> for ReviewResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            job: m.job_id,
            rating: m.rating,
            description: m.description,
            first_name: m.first_name,
            email: m.email,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_out_of_range_is_rejected() {
        let review = CreateReview {
            job: 1,
            rating: 6,
            description: String::new(),
            first_name: "Ann".into(),
            email: "ann@example.com".into(),
        };
        assert!(review.validate().is_err());
    }

    #[test]
    fn valid_review_passes() {
        let review = CreateReview {
            job: 1,
            rating: 5,
            description: "great".into(),
            first_name: "Ann".into(),
            email: "ann@example.com".into(),
        };
        assert!(review.validate().is_ok());
    }
}
