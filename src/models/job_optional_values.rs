use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `job_optional_values` table: the per-job values of
/// the configured optional fields.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "job_optional_values")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub job_id: i32,
    pub optional_field_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub value: Option<String>,
    pub image_url: Option<String>,
    pub file_url: Option<String>,
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
        belongs_to = "super::optional_fields::Entity",
        from = "Column::OptionalFieldId",
        to = "super::optional_fields::Column::Id"
    )]
    OptionalField,
}

impl Related<super::jobs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Job.def()
    }
}

impl Related<super::optional_fields::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OptionalField.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
