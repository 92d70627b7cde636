use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::auth::google::GoogleVerifier;
use crate::auth::jwt;
use crate::auth::middleware::{AuthenticatedUser, JwtSecret};
use crate::auth::password;
use crate::db::users as user_db;
use crate::error::ApiError;
use crate::models::users::{GoogleAuthRequest, Login, Register, UpdateProfile, UserResponse};
use crate::responses;
use crate::validation::validate_body;

/// POST /api/register — create an account and return a token pair.
pub async fn register(
    db: web::Data<DatabaseConnection>,
    secret: web::Data<JwtSecret>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input: Register = validate_body(body.into_inner())?;
    input.validate()?;

    if user_db::find_by_phone(db.get_ref(), &input.phone).await?.is_some() {
        return Err(ApiError::field("phone", "A user with this phone already exists"));
    }
    if user_db::find_by_email(db.get_ref(), &input.email).await?.is_some() {
        return Err(ApiError::field("email", "A user with this email already exists"));
    }

    let password_hash = password::hash_password(&input.password).map_err(ApiError::Internal)?;
    let user = user_db::insert_user(db.get_ref(), input, password_hash).await?;
    tracing::info!("registered user {}", user.id);

    let tokens = jwt::issue_token_pair(user.id, &secret.0).map_err(ApiError::Internal)?;

    Ok(responses::created(tokens))
}

/// POST /api/login — exchange phone + password for a token pair.
pub async fn login(
    db: web::Data<DatabaseConnection>,
    secret: web::Data<JwtSecret>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input: Login = validate_body(body.into_inner())?;

    let user = user_db::find_by_phone(db.get_ref(), &input.phone)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Incorrect phone or password".to_string()))?;

    let valid = user
        .password_hash
        .as_deref()
        .is_some_and(|hash| password::verify_password(&input.password, hash));

    if !valid {
        return Err(ApiError::Unauthorized("Incorrect phone or password".to_string()));
    }
    if !user.is_active {
        return Err(ApiError::Unauthorized("User account is disabled".to_string()));
    }

    let tokens = jwt::issue_token_pair(user.id, &secret.0).map_err(ApiError::Internal)?;

    Ok(responses::success(tokens))
}

/// POST /api/google — social login with a Google ID token.
pub async fn google(
    db: web::Data<DatabaseConnection>,
    secret: web::Data<JwtSecret>,
    verifier: web::Data<GoogleVerifier>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input: GoogleAuthRequest = validate_body(body.into_inner())?;

    let claims = verifier.verify(&input.auth_token).await?;
    let user = user_db::find_or_create_google(db.get_ref(), claims).await?;

    if !user.is_active {
        return Err(ApiError::Unauthorized("User account is disabled".to_string()));
    }

    let tokens = jwt::issue_token_pair(user.id, &secret.0).map_err(ApiError::Internal)?;

    Ok(responses::success(tokens))
}

/// GET /api/profile — return the authenticated user's profile.
pub async fn get_profile(user: AuthenticatedUser) -> Result<HttpResponse, ApiError> {
    Ok(responses::success(UserResponse::from(user.0)))
}

/// PUT /api/profile — partially update the authenticated user's profile.
pub async fn update_profile(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input: UpdateProfile = validate_body(body.into_inner())?;

    // Uniqueness pre-checks when the login identifiers change.
    if let Some(ref phone) = input.phone {
        if user.0.phone.as_deref() != Some(phone.as_str())
            && user_db::find_by_phone(db.get_ref(), phone).await?.is_some()
        {
            return Err(ApiError::field("phone", "A user with this phone already exists"));
        }
    }
    if let Some(ref email) = input.email {
        if *email != user.0.email
            && user_db::find_by_email(db.get_ref(), email).await?.is_some()
        {
            return Err(ApiError::field("email", "A user with this email already exists"));
        }
    }

    let updated = user_db::update_profile(db.get_ref(), user.0.id, input)
        .await?
        .ok_or_else(|| ApiError::not_found("User", user.0.id))?;

    Ok(responses::success(UserResponse::from(updated)))
}

/// DELETE /api/profile — delete the authenticated user's account.
pub async fn delete_profile(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let result = user_db::delete_user(db.get_ref(), user.0.id).await?;

    if result.rows_affected > 0 {
        Ok(responses::deleted("User deleted"))
    } else {
        Err(ApiError::not_found("User", user.0.id))
    }
}
