use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::PreSave;
use crate::error::ApiError;
use crate::validation::ExpectedFields;

/// SeaORM entity for the `countries` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "countries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub short_name: String,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cities::Entity")]
    Cities,
}

impl Related<super::cities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cities.def()
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
pub struct CreateCountry {
    pub name: String,
    pub short_name: String,
}

impl ExpectedFields for CreateCountry {
    const FIELDS: &'static [&'static str] = &["name", "short_name"];
}

impl CreateCountry {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.short_name.is_empty() || self.short_name.len() > 4 {
            return Err(ApiError::field(
                "short_name",
                "must be between 1 and 4 characters",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCountry {
    pub name: Option<String>,
    pub short_name: Option<String>,
}

impl ExpectedFields for UpdateCountry {
    const FIELDS: &'static [&'static str] = &["name", "short_name"];
}

#[derive(Debug, Clone, Serialize)]
pub struct CountryResponse {
    pub id: i32,
    pub name: String,
    pub short_name: String,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

impl From<Model> for CountryResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            short_name: m.short_name,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
