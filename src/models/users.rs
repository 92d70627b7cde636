use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::PreSave;
use crate::error::ApiError;
use crate::validation::ExpectedFields;

/// SeaORM entity for the `users` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Null for social-login-only accounts; unique among the rest.
    #[sea_orm(unique)]
    pub phone: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub photo_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub about: Option<String>,
    pub is_agree_terms: bool,
    pub is_active: bool,
    pub is_staff: bool,
    pub auth_provider: String,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::jobs::Entity")]
    Jobs,
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
}

impl Related<super::jobs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Jobs.def()
    }
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
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

// ── DTOs (not stored in DB, used for request bodies) ──

#[derive(Debug, Clone, Deserialize)]
pub struct Register {
    pub phone: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub photo: Option<String>,
    pub about: Option<String>,
}

impl ExpectedFields for Register {
    const FIELDS: &'static [&'static str] = &[
        "phone",
        "email",
        "password",
        "first_name",
        "last_name",
        "photo",
        "about",
    ];
}

impl Register {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.phone.is_empty() || self.phone.len() > 18 {
            return Err(ApiError::field("phone", "must be between 1 and 18 characters"));
        }
        if !self.email.contains('@') {
            return Err(ApiError::field("email", "must be a valid email address"));
        }
        if self.password.is_empty() || self.password.len() > 50 {
            return Err(ApiError::field(
                "password",
                "must be between 1 and 50 characters",
            ));
        }
        for (field, value) in [("first_name", &self.first_name), ("last_name", &self.last_name)] {
            if let Some(name) = value {
                if name.len() > 50 {
                    return Err(ApiError::field(field, "cannot exceed 50 characters"));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Login {
    pub phone: String,
    pub password: String,
}

impl ExpectedFields for Login {
    const FIELDS: &'static [&'static str] = &["phone", "password"];
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfile {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub photo: Option<String>,
    pub about: Option<String>,
}

impl ExpectedFields for UpdateProfile {
    const FIELDS: &'static [&'static str] =
        &["phone", "email", "first_name", "last_name", "photo", "about"];
}

/// `POST /google` body: the ID token obtained from Google's sign-in flow.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleAuthRequest {
    pub auth_token: String,
}

impl ExpectedFields for GoogleAuthRequest {
    const FIELDS: &'static [&'static str] = &["auth_token"];
}

/// A safe user representation for API responses (never leaks the password
/// hash or staff flags).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub phone: Option<String>,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub photo: Option<String>,
    pub about: Option<String>,
    pub is_agree_terms: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

impl From<Model> for UserResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            phone: m.phone,
            email: m.email,
            first_name: m.first_name,
            last_name: m.last_name,
            photo: m.photo_url,
            about: m.about,
            is_agree_terms: m.is_agree_terms,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
