//! Integration test for JWT auth validation.
//!
//! These tests mint JWTs locally using the same HS256 secret the server
//! would use, then validate them through the `validate_token` function.
//! No running server or database is needed.
//!
//! Run with: `cargo test --test auth_test`
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use jobboard_backend::auth::jwt::{
    Claims, TokenType, issue_token_pair, validate_token,
};

/// A fake secret for testing — never use the real one in tests committed to git.
const TEST_SECRET: &str = "test-secret-at-least-256-bits-long-for-hs256-xxxxxxx";

/// Helper: mint a JWT signed with HS256 using the test secret.
fn mint_test_token(sub: &str, token_type: TokenType, ttl_secs: i64) -> String {
    let now = Utc::now().timestamp();

    let claims = Claims {
        sub: sub.to_string(),
        exp: (now + ttl_secs) as usize,
        iat: now as usize,
        token_type,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("Failed to encode test JWT")
}

#[test]
fn test_valid_token_decodes_correctly() {
    let token = mint_test_token("42", TokenType::Access, 3600);

    let claims = validate_token(&token, TEST_SECRET).expect("Token should be valid");

    assert_eq!(claims.sub, "42");
    assert_eq!(claims.token_type, TokenType::Access);
    assert_eq!(claims.user_id().unwrap(), 42);
}

#[test]
fn test_expired_token_is_rejected() {
    // Expired 5 minutes ago (well past the 60s default leeway).
    let token = mint_test_token("42", TokenType::Access, -300);

    let result = validate_token(&token, TEST_SECRET);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("ExpiredSignature"));
}

#[test]
fn test_wrong_secret_is_rejected() {
    let token = mint_test_token("42", TokenType::Access, 3600);

    let result = validate_token(&token, "completely-wrong-secret-xxxxxxxxxxxxxxxxxxx");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("InvalidSignature"));
}

#[test]
fn test_garbage_token_is_rejected() {
    let result = validate_token("not.a.valid.jwt", TEST_SECRET);
    assert!(result.is_err());
}

#[test]
fn test_non_numeric_sub_is_rejected() {
    let token = mint_test_token("not-a-number", TokenType::Access, 3600);

    let claims = validate_token(&token, TEST_SECRET).expect("Token itself is valid");
    assert!(claims.user_id().is_err());
}

#[test]
fn test_issued_pair_has_both_token_types() {
    let pair = issue_token_pair(7, TEST_SECRET).expect("Failed to issue pair");

    let access = validate_token(&pair.access, TEST_SECRET).unwrap();
    assert_eq!(access.token_type, TokenType::Access);
    assert_eq!(access.user_id().unwrap(), 7);

    let refresh = validate_token(&pair.refresh, TEST_SECRET).unwrap();
    assert_eq!(refresh.token_type, TokenType::Refresh);
    assert!(refresh.exp > access.exp);
}
