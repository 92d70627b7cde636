use sea_orm::*;

use crate::models::PreSave;
use crate::models::categories::{self, CreateCategory, UpdateCategory};

/// Base listing query: every category, newest first.
pub fn all_ordered() -> Select<categories::Entity> {
    categories::Entity::find().order_by_desc(categories::Column::Id)
}

/// Insert a new category.
pub async fn insert_category(
    db: &DatabaseConnection,
    input: CreateCategory,
) -> Result<categories::Model, DbErr> {
    let mut new_category = categories::ActiveModel {
        name: Set(input.name),
        parent_id: Set(input.parent),
        icon_url: Set(input.icon),
        ..Default::default()
    };
    new_category.pre_save(true);

    new_category.insert(db).await
}

/// Fetch a single category by ID.
pub async fn get_category_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<categories::Model>, DbErr> {
    categories::Entity::find_by_id(id).one(db).await
}

/// Update an existing category. `Ok(None)` if the id does not exist.
pub async fn update_category(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateCategory,
) -> Result<Option<categories::Model>, DbErr> {
    let Some(category) = categories::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: categories::ActiveModel = category.into();

    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(parent) = input.parent {
        active.parent_id = Set(Some(parent));
    }
    if let Some(icon) = input.icon {
        active.icon_url = Set(Some(icon));
    }
    active.pre_save(false);

    active.update(db).await.map(Some)
}

/// Delete a category by ID.
pub async fn delete_category(db: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
    categories::Entity::delete_by_id(id).exec(db).await
}
