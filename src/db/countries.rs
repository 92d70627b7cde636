use sea_orm::*;

use crate::models::PreSave;
use crate::models::countries::{self, CreateCountry, UpdateCountry};

/// Base listing query: every country, newest first.
pub fn all_ordered() -> Select<countries::Entity> {
    countries::Entity::find().order_by_desc(countries::Column::Id)
}

/// Insert a new country.
pub async fn insert_country(
    db: &DatabaseConnection,
    input: CreateCountry,
) -> Result<countries::Model, DbErr> {
    let mut new_country = countries::ActiveModel {
        name: Set(input.name),
        short_name: Set(input.short_name),
        ..Default::default()
    };
    new_country.pre_save(true);

    new_country.insert(db).await
}

/// Fetch a single country by ID.
pub async fn get_country_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<countries::Model>, DbErr> {
    countries::Entity::find_by_id(id).one(db).await
}

/// Update an existing country. `Ok(None)` if the id does not exist.
pub async fn update_country(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateCountry,
) -> Result<Option<countries::Model>, DbErr> {
    let Some(country) = countries::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: countries::ActiveModel = country.into();

    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(short_name) = input.short_name {
        active.short_name = Set(short_name);
    }
    active.pre_save(false);

    active.update(db).await.map(Some)
}

/// Delete a country by ID.
pub async fn delete_country(db: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
    countries::Entity::delete_by_id(id).exec(db).await
}
