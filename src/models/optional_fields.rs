use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Value type of a configurable extra job attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum FieldType {
    #[sea_orm(string_value = "string")]
    String,
    #[sea_orm(string_value = "integer")]
    Integer,
    #[sea_orm(string_value = "boolean")]
    Boolean,
    #[sea_orm(string_value = "date")]
    Date,
    #[sea_orm(string_value = "time")]
    Time,
    #[sea_orm(string_value = "datetime")]
    DateTime,
    #[sea_orm(string_value = "float")]
    Float,
    #[sea_orm(string_value = "image")]
    Image,
    #[sea_orm(string_value = "file")]
    File,
}

/// SeaORM entity for the `optional_fields` table: admin-configured extra
/// attributes a job ad may carry.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "optional_fields")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub key: String,
    pub field_type: FieldType,
    pub is_required: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub default_value: Option<String>,
    pub max_length: Option<i32>,
    pub min_length: Option<i32>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::job_optional_values::Entity")]
    Values,
}

impl Related<super::job_optional_values::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Values.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
