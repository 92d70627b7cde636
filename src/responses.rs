use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;
use serde_json::Value;

/// The uniform wire shape every endpoint returns.
///
/// Exactly one of `data`, `message` or `error` is present, depending on which
/// builder produced the envelope. Handlers never assemble this by hand.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl<T: Serialize> Envelope<T> {
    fn data(status: StatusCode, data: T) -> Self {
        Self {
            success: true,
            status_code: status.as_u16(),
            data: Some(data),
            message: None,
            error: None,
        }
    }
}

/// 200 with a payload.
pub fn success<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(Envelope::data(StatusCode::OK, data))
}

/// 201 for a freshly persisted record.
pub fn created<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Created().json(Envelope::data(StatusCode::CREATED, data))
}

/// 200 acknowledging a removal.
pub fn deleted(message: impl Into<String>) -> HttpResponse {
    HttpResponse::Ok().json(Envelope::<Value> {
        success: true,
        status_code: StatusCode::OK.as_u16(),
        data: None,
        message: Some(message.into()),
        error: None,
    })
}

/// 400 with a string or structured error detail.
pub fn bad_request(error: impl Into<Value>) -> HttpResponse {
    failure(StatusCode::BAD_REQUEST, error.into())
}

/// Failure envelope for an arbitrary status. `ApiError::error_response` goes
/// through here so 401/403/404/500 share the same body shape as 400.
pub fn failure(status: StatusCode, error: Value) -> HttpResponse {
    HttpResponse::build(status).json(Envelope::<Value> {
        success: false,
        status_code: status.as_u16(),
        data: None,
        message: None,
        error: Some(error),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_carries_data_only() {
        let envelope = Envelope::data(StatusCode::OK, json!({"id": 1}));
        let body = serde_json::to_value(&envelope).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["status_code"], 200);
        assert_eq!(body["data"]["id"], 1);
        assert!(body.get("message").is_none());
        assert!(body.get("error").is_none());
    }

    #[test]
    fn created_envelope_uses_201() {
        let envelope = Envelope::data(StatusCode::CREATED, json!({"name": "Plumbing"}));
        let body = serde_json::to_value(&envelope).unwrap();
        assert_eq!(body["status_code"], 201);
        assert_eq!(body["data"]["name"], "Plumbing");
    }

    #[test]
    fn http_status_matches_envelope_status() {
        assert_eq!(success(json!(1)).status(), StatusCode::OK);
        assert_eq!(created(json!(1)).status(), StatusCode::CREATED);
        assert_eq!(deleted("Successfully deleted").status(), StatusCode::OK);
        assert_eq!(bad_request("nope").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            failure(StatusCode::NOT_FOUND, json!("Job 3 not found")).status(),
            StatusCode::NOT_FOUND
        );
    }
}
