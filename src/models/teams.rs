use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::PreSave;
use super::team_roles::TeamRoleResponse;
use crate::validation::ExpectedFields;

/// SeaORM entity for the `teams` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub photo_url: Option<String>,
    pub role_id: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team_roles::Entity",
        from = "Column::RoleId",
        to = "super::team_roles::Column::Id"
    )]
    Role,
}

impl Related<super::team_roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
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
pub struct CreateTeam {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub photo: Option<String>,
    pub role: i32,
}

impl ExpectedFields for CreateTeam {
    const FIELDS: &'static [&'static str] = &["name", "description", "photo", "role"];
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTeam {
    pub name: Option<String>,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub role: Option<i32>,
}

impl ExpectedFields for UpdateTeam {
    const FIELDS: &'static [&'static str] = &["name", "description", "photo", "role"];
}

/// Team member with its role resolved to a nested summary.
#[derive(Debug, Clone, Serialize)]
pub struct TeamResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub photo: Option<String>,
    pub role: Option<TeamRoleResponse>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

impl TeamResponse {
    pub fn from_model(m: Model, role: Option<super::team_roles::Model>) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            photo: m.photo_url,
            role: role.map(TeamRoleResponse::from),
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
