use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::PreSave;
use crate::validation::ExpectedFields;

/// SeaORM entity for the `cities` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub country_id: i32,
    pub short_name: String,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::countries::Entity",
        from = "Column::CountryId",
        to = "super::countries::Column::Id"
    )]
    Country,
    #[sea_orm(has_many = "super::jobs::Entity")]
    Jobs,
}

impl Related<super::countries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Country.def()
    }
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
pub struct CreateCity {
    pub name: String,
    pub country: i32,
    pub short_name: String,
}

impl ExpectedFields for CreateCity {
    const FIELDS: &'static [&'static str] = &["name", "country", "short_name"];
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCity {
    pub name: Option<String>,
    pub country: Option<i32>,
    pub short_name: Option<String>,
}

impl ExpectedFields for UpdateCity {
    const FIELDS: &'static [&'static str] = &["name", "country", "short_name"];
}

#[derive(Debug, Clone, Serialize)]
pub struct CityResponse {
    pub id: i32,
    pub name: String,
    pub country: i32,
    pub short_name: String,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

impl From<Model> for CityResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            country: m.country_id,
            short_name: m.short_name,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
