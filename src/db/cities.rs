use sea_orm::*;

use crate::models::PreSave;
use crate::models::cities::{self, CreateCity, UpdateCity};

/// Base listing query: every city, newest first.
pub fn all_ordered() -> Select<cities::Entity> {
    cities::Entity::find().order_by_desc(cities::Column::Id)
}

/// Insert a new city.
pub async fn insert_city(
    db: &DatabaseConnection,
    input: CreateCity,
) -> Result<cities::Model, DbErr> {
    let mut new_city = cities::ActiveModel {
        name: Set(input.name),
        country_id: Set(input.country),
        short_name: Set(input.short_name),
        ..Default::default()
    };
    new_city.pre_save(true);

    new_city.insert(db).await
}

/// Fetch a single city by ID.
pub async fn get_city_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<cities::Model>, DbErr> {
    cities::Entity::find_by_id(id).one(db).await
}

/// Update an existing city. `Ok(None)` if the id does not exist.
pub async fn update_city(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateCity,
) -> Result<Option<cities::Model>, DbErr> {
    let Some(city) = cities::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: cities::ActiveModel = city.into();

    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(country) = input.country {
        active.country_id = Set(country);
    }
    if let Some(short_name) = input.short_name {
        active.short_name = Set(short_name);
    }
    active.pre_save(false);

    active.update(db).await.map(Some)
}

/// Delete a city by ID.
pub async fn delete_city(db: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
    cities::Entity::delete_by_id(id).exec(db).await
}
