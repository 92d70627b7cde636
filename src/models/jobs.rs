use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::PreSave;
use crate::error::ApiError;
use crate::validation::ExpectedFields;

/// Publication state of a job ad, stored as a lowercase string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum JobStatus {
    #[sea_orm(string_value = "published")]
    Published,
    #[sea_orm(string_value = "under_review")]
    UnderReview,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "rejected")]
    Rejected,
    #[sea_orm(string_value = "archived")]
    Archived,
    #[sea_orm(string_value = "blocked")]
    Blocked,
}

/// SeaORM entity for the `jobs` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub category_id: i32,
    pub city_id: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub contact_number: String,
    pub email: String,
    pub name: String,
    pub user_id: i32,
    pub status: JobStatus,
    pub photo_url: Option<String>,
    pub is_vip: bool,
    pub is_top: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::cities::Entity",
        from = "Column::CityId",
        to = "super::cities::Column::Id"
    )]
    City,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
    #[sea_orm(has_many = "super::job_optional_values::Entity")]
    OptionalValues,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::cities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::City.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
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

// ── DTOs ──

/// One `additionally` entry on job creation: a value for a configured
/// optional field.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionalValueInput {
    pub optional_field: i32,
    pub value: Option<String>,
    pub image: Option<String>,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateJob {
    pub title: String,
    pub category: i32,
    pub city: i32,
    #[serde(default)]
    pub description: String,
    pub contact_number: String,
    pub email: String,
    pub name: String,
    pub status: Option<JobStatus>,
    pub photo: Option<String>,
    #[serde(default)]
    pub is_vip: bool,
    #[serde(default)]
    pub is_top: bool,
    #[serde(default)]
    pub additionally: Vec<OptionalValueInput>,
}

impl ExpectedFields for CreateJob {
    const FIELDS: &'static [&'static str] = &[
        "title",
        "category",
        "city",
        "description",
        "contact_number",
        "email",
        "name",
        "status",
        "photo",
        "is_vip",
        "is_top",
        "additionally",
    ];
}

impl CreateJob {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.is_empty() || self.title.len() > 200 {
            return Err(ApiError::field("title", "must be between 1 and 200 characters"));
        }
        if self.contact_number.is_empty() || self.contact_number.len() > 18 {
            return Err(ApiError::field(
                "contact_number",
                "must be between 1 and 18 characters",
            ));
        }
        if !self.email.contains('@') {
            return Err(ApiError::field("email", "must be a valid email address"));
        }
        if self.name.is_empty() || self.name.len() > 200 {
            return Err(ApiError::field("name", "must be between 1 and 200 characters"));
        }
        Ok(())
    }
}

/// `GET /jobs` filter parameters; `category` and `city` are comma-separated
/// id lists, parsed (and rejected) by the filter composer.
#[derive(Debug, Clone, Deserialize)]
pub struct JobFilter {
    pub title: Option<String>,
    pub category: Option<String>,
    pub city: Option<String>,
}

// ── Response shapes ──

#[derive(Debug, Clone, Serialize)]
pub struct CategoryBrief {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CityBrief {
    pub id: i32,
    pub name: String,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserBrief {
    pub id: i32,
    pub email: String,
    pub phone: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub photo: Option<String>,
}

impl From<super::users::Model> for UserBrief {
    fn from(m: super::users::Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            phone: m.phone,
            first_name: m.first_name,
            last_name: m.last_name,
            photo: m.photo_url,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionalValueResponse {
    pub optional_field: i32,
    pub name: String,
    pub value: Option<String>,
    pub image: Option<String>,
    pub file: Option<String>,
}

/// Detail-shaped job row: FK ids resolved to nested summaries.
#[derive(Debug, Clone, Serialize)]
pub struct JobResponse {
    pub id: i32,
    pub title: String,
    pub category: Option<CategoryBrief>,
    pub city: Option<CityBrief>,
    pub description: String,
    pub contact_number: String,
    pub email: String,
    pub name: String,
    pub user: Option<UserBrief>,
    pub status: JobStatus,
    pub photo: Option<String>,
    pub is_vip: bool,
    pub is_top: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
    pub additionally: Vec<OptionalValueResponse>,
}
