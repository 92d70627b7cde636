use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

use crate::error::ApiError;

/// The exact set of body keys an endpoint accepts.
///
/// Each create/update payload declares its wire contract once here; handlers
/// go through [`validate_body`] instead of comparing ad-hoc key sets. An
/// empty `FIELDS` rejects every key, which is what body-less endpoints want.
pub trait ExpectedFields {
    const FIELDS: &'static [&'static str];
}

/// Keys present in `body` but absent from `allowed`.
///
/// Pure set difference. `serde_json::Map` iterates in key order, so the
/// result is deterministic.
pub fn unexpected_fields(body: &Map<String, Value>, allowed: &[&str]) -> Vec<String> {
    body.keys()
        .filter(|key| !allowed.contains(&key.as_str()))
        .cloned()
        .collect()
}

/// Whitelist-check a raw JSON body against `T`'s declared contract, then
/// deserialize it.
pub fn validate_body<T>(body: Value) -> Result<T, ApiError>
where
    T: DeserializeOwned + ExpectedFields,
{
    let Value::Object(ref map) = body else {
        return Err(ApiError::bad_request("Request body must be a JSON object"));
    };

    let extra = unexpected_fields(map, T::FIELDS);
    if !extra.is_empty() {
        return Err(ApiError::unexpected_fields(&extra));
    }

    serde_json::from_value(body).map_err(|e| ApiError::bad_request(e.to_string()))
}

/// Parse a comma-separated id list such as `?city=1,2,3`.
///
/// A non-integer token is a structured 400 naming the parameter, never an
/// unhandled error.
pub fn parse_id_list(param: &str, raw: &str) -> Result<Vec<i32>, ApiError> {
    raw.split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<i32>().map_err(|_| {
                ApiError::BadRequest(json!({
                    param: format!("Invalid integer value: '{token}'"),
                }))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct CreateThing {
        name: String,
        #[serde(default)]
        color: Option<String>,
    }

    impl ExpectedFields for CreateThing {
        const FIELDS: &'static [&'static str] = &["name", "color"];
    }

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn subset_of_allowed_keys_is_valid() {
        let body = obj(json!({"name": "Plumbing"}));
        assert!(unexpected_fields(&body, &["name", "color"]).is_empty());
    }

    #[test]
    fn returns_exactly_the_extra_keys() {
        let body = obj(json!({"name": "x", "foo": 1, "bar": 2}));
        let extra = unexpected_fields(&body, &["name"]);
        assert_eq!(extra, vec!["bar".to_string(), "foo".to_string()]);
    }

    #[test]
    fn empty_allowed_set_flags_every_key() {
        let body = obj(json!({"a": 1, "b": 2}));
        let extra = unexpected_fields(&body, &[]);
        assert_eq!(extra.len(), 2);
    }

    #[test]
    fn validate_body_accepts_declared_contract() {
        let thing: CreateThing =
            validate_body(json!({"name": "Plumbing", "color": "blue"})).unwrap();
        assert_eq!(thing.name, "Plumbing");
        assert_eq!(thing.color.as_deref(), Some("blue"));
    }

    #[test]
    fn validate_body_names_the_offending_field() {
        let result = validate_body::<CreateThing>(json!({"name": "Plumbing", "foo": 1}));
        match result {
            Err(ApiError::BadRequest(Value::String(s))) => {
                assert_eq!(s, "Unexpected fields: foo");
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn validate_body_rejects_non_object() {
        assert!(validate_body::<CreateThing>(json!([1, 2])).is_err());
    }

    #[test]
    fn id_list_parses_and_trims() {
        assert_eq!(parse_id_list("city", "1,2, 3").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn malformed_id_token_is_a_structured_error() {
        let err = parse_id_list("city", "1,x,3").unwrap_err();
        match err {
            ApiError::BadRequest(v) => {
                assert_eq!(v["city"], "Invalid integer value: 'x'");
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }
}
