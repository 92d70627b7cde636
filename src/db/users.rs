use sea_orm::*;

use crate::auth::google::GoogleClaims;
use crate::models::PreSave;
use crate::models::users::{self, Register, UpdateProfile};

/// Fetch a single user by ID.
pub async fn get_user_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(id).one(db).await
}

/// Fetch a user by phone number (the login identifier).
pub async fn find_by_phone(
    db: &DatabaseConnection,
    phone: &str,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find()
        .filter(users::Column::Phone.eq(phone))
        .one(db)
        .await
}

/// Fetch a user by email.
pub async fn find_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(db)
        .await
}

/// Insert a password-registered user. The caller has already checked
/// uniqueness and hashed the password.
pub async fn insert_user(
    db: &DatabaseConnection,
    input: Register,
    password_hash: String,
) -> Result<users::Model, DbErr> {
    let mut new_user = users::ActiveModel {
        phone: Set(Some(input.phone)),
        email: Set(input.email),
        password_hash: Set(Some(password_hash)),
        first_name: Set(input.first_name),
        last_name: Set(input.last_name),
        photo_url: Set(input.photo),
        about: Set(input.about),
        is_agree_terms: Set(false),
        is_active: Set(true),
        is_staff: Set(false),
        auth_provider: Set("password".to_string()),
        ..Default::default()
    };
    new_user.pre_save(true);

    new_user.insert(db).await
}

/// Find the account matching a verified Google ID token, creating it from
/// the token's claims on first login.
pub async fn find_or_create_google(
    db: &DatabaseConnection,
    claims: GoogleClaims,
) -> Result<users::Model, DbErr> {
    if let Some(existing) = find_by_email(db, &claims.email).await? {
        return Ok(existing);
    }

    let mut new_user = users::ActiveModel {
        phone: Set(None),
        email: Set(claims.email),
        password_hash: Set(None),
        first_name: Set(claims.name),
        last_name: Set(None),
        photo_url: Set(claims.picture),
        about: Set(None),
        is_agree_terms: Set(false),
        is_active: Set(true),
        is_staff: Set(false),
        auth_provider: Set("google".to_string()),
        ..Default::default()
    };
    new_user.pre_save(true);

    new_user.insert(db).await
}

/// Partially update a user's profile. `Ok(None)` if the id does not exist.
pub async fn update_profile(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateProfile,
) -> Result<Option<users::Model>, DbErr> {
    let Some(user) = users::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: users::ActiveModel = user.into();

    if let Some(phone) = input.phone {
        active.phone = Set(Some(phone));
    }
    if let Some(email) = input.email {
        active.email = Set(email);
    }
    if let Some(first_name) = input.first_name {
        active.first_name = Set(Some(first_name));
    }
    if let Some(last_name) = input.last_name {
        active.last_name = Set(Some(last_name));
    }
    if let Some(photo) = input.photo {
        active.photo_url = Set(Some(photo));
    }
    if let Some(about) = input.about {
        active.about = Set(Some(about));
    }
    active.pre_save(false);

    active.update(db).await.map(Some)
}

/// Delete a user by ID.
pub async fn delete_user(db: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
    users::Entity::delete_by_id(id).exec(db).await
}
