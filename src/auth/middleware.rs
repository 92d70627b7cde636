use actix_web::FromRequest;
use actix_web::{HttpRequest, dev::Payload, web};
use sea_orm::DatabaseConnection;
use std::future::Future;
use std::pin::Pin;

use crate::auth::jwt::{self, TokenType};
use crate::db::users as user_db;
use crate::error::ApiError;
use crate::models::users;

/// Extractor guarding authenticated routes: validates the Bearer token and
/// loads the calling user's row.
pub struct AuthenticatedUser(pub users::Model);

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            // 1. Extract the Bearer token from the Authorization header.
            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| {
                    ApiError::Unauthorized("Missing Authorization header".to_string())
                })?;

            let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
                ApiError::Unauthorized(
                    "Authorization header must be: Bearer <token>".to_string(),
                )
            })?;

            // 2. Get the signing secret from app data.
            let secret = req
                .app_data::<web::Data<JwtSecret>>()
                .ok_or_else(|| ApiError::Internal("JWT secret not configured".to_string()))?;

            // 3. Validate the JWT. Refresh tokens are not valid here.
            let claims = jwt::validate_token(token, &secret.0)
                .map_err(|e| ApiError::Unauthorized(format!("Invalid token: {e}")))?;

            if claims.token_type != TokenType::Access {
                return Err(ApiError::Unauthorized(
                    "Refresh tokens cannot access resources".to_string(),
                ));
            }

            let user_id = claims.user_id().map_err(ApiError::Unauthorized)?;

            // 4. Load the user row.
            let db = req
                .app_data::<web::Data<DatabaseConnection>>()
                .ok_or_else(|| ApiError::Internal("Database not configured".to_string()))?;

            let user = user_db::get_user_by_id(db.get_ref(), user_id)
                .await?
                .ok_or_else(|| {
                    ApiError::Unauthorized("User account no longer exists".to_string())
                })?;

            if !user.is_active {
                return Err(ApiError::Unauthorized(
                    "User account is disabled".to_string(),
                ));
            }

            Ok(AuthenticatedUser(user))
        })
    }
}

/// Wrapper type to store the JWT secret in Actix app data.
#[derive(Clone)]
pub struct JwtSecret(pub String);
