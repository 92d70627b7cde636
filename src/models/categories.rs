use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::PreSave;
use crate::validation::ExpectedFields;

/// SeaORM entity for the `categories` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub parent_id: Option<i32>,
    pub icon_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::jobs::Entity")]
    Jobs,
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id"
    )]
    Parent,
}

impl Related<super::jobs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Jobs.def()
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
pub struct CreateCategory {
    pub name: String,
    pub parent: Option<i32>,
    pub icon: Option<String>,
}

impl ExpectedFields for CreateCategory {
    const FIELDS: &'static [&'static str] = &["name", "parent", "icon"];
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub parent: Option<i32>,
    pub icon: Option<String>,
}

impl ExpectedFields for UpdateCategory {
    const FIELDS: &'static [&'static str] = &["name", "parent", "icon"];
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    pub parent: Option<i32>,
    pub icon: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

impl From<Model> for CategoryResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            parent: m.parent_id,
            icon: m.icon_url,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
