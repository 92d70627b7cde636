use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde_json::{Value, json};
use thiserror::Error;

use crate::responses;

/// Unified error type for all handlers. Every variant renders through the
/// response envelope, so clients always see the same wire shape.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(Value),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("upstream service error: {0}")]
    Upstream(String),
    #[error("database error: {0}")]
    Db(#[from] DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// A 400 with a plain string detail.
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::BadRequest(Value::String(detail.into()))
    }

    /// A 400 with a single field-level error, e.g. `{"rating": "must be 1..=5"}`.
    pub fn field(field: &str, detail: impl Into<String>) -> Self {
        Self::BadRequest(json!({ field: detail.into() }))
    }

    /// A 400 naming the body keys outside the endpoint's declared contract.
    pub fn unexpected_fields(fields: &[String]) -> Self {
        Self::bad_request(format!("Unexpected fields: {}", fields.join(", ")))
    }

    /// A 404 for a missing `{resource}` with the given id.
    pub fn not_found(resource: &str, id: i32) -> Self {
        Self::NotFound(format!("{resource} {id}"))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Db(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            ApiError::BadRequest(detail) => detail.clone(),
            ApiError::Unauthorized(detail) | ApiError::Forbidden(detail) => {
                Value::String(detail.clone())
            }
            ApiError::NotFound(what) => Value::String(format!("{what} not found")),
            ApiError::Upstream(detail) => {
                tracing::warn!("upstream service error: {detail}");
                Value::String("Upstream service error".to_string())
            }
            ApiError::Db(e) => {
                // Never leak database internals to the client.
                tracing::error!("database error: {e}");
                Value::String("Internal server error".to_string())
            }
            ApiError::Internal(detail) => {
                tracing::error!("internal error: {detail}");
                Value::String("Internal server error".to_string())
            }
        };
        responses::failure(self.status_code(), error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_fields_lists_offenders_verbatim() {
        let err = ApiError::unexpected_fields(&["foo".to_string(), "bar".to_string()]);
        match err {
            ApiError::BadRequest(Value::String(s)) => {
                assert_eq!(s, "Unexpected fields: foo, bar");
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            ApiError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthorized("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::not_found("Category", 7).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Db(DbErr::Custom("boom".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn field_error_is_structured() {
        let err = ApiError::field("rating", "must be between 1 and 5");
        match err {
            ApiError::BadRequest(v) => {
                assert_eq!(v["rating"], "must be between 1 and 5");
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }
}
