use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::validation::ExpectedFields;

/// SeaORM entity for the `team_roles` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "team_roles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::teams::Entity")]
    Teams,
}

impl Related<super::teams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teams.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamRole {
    pub name: String,
}

impl ExpectedFields for CreateTeamRole {
    const FIELDS: &'static [&'static str] = &["name"];
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTeamRole {
    pub name: Option<String>,
}

impl ExpectedFields for UpdateTeamRole {
    const FIELDS: &'static [&'static str] = &["name"];
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamRoleResponse {
    pub id: i32,
    pub name: String,
}

impl From<Model> for TeamRoleResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
        }
    }
}
