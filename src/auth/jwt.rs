use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Access tokens are short-lived; refresh tokens let clients mint new pairs
/// through a re-login without storing credentials.
pub const ACCESS_TTL_SECS: i64 = 60 * 60 * 24;
pub const REFRESH_TTL_SECS: i64 = 60 * 60 * 24 * 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Claims carried by locally issued HS256 tokens.
///
/// `sub` is the user's primary key, stringified per RFC 7519.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    /// Token expiration (Unix timestamp).
    pub exp: usize,
    /// Token issued-at (Unix timestamp).
    pub iat: usize,
    pub token_type: TokenType,
}

impl Claims {
    /// Extract the user id from the `sub` claim.
    pub fn user_id(&self) -> Result<i32, String> {
        self.sub
            .parse()
            .map_err(|e| format!("Invalid user id in sub claim: {e}"))
    }
}

/// The `{access, refresh}` pair returned by register, login and google.
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

fn issue(user_id: i32, token_type: TokenType, ttl_secs: i64, secret: &str) -> Result<String, String> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        exp: (now + ttl_secs) as usize,
        iat: now as usize,
        token_type,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("Failed to encode token: {e}"))
}

/// Mint a fresh access + refresh pair for a user.
pub fn issue_token_pair(user_id: i32, secret: &str) -> Result<TokenPair, String> {
    Ok(TokenPair {
        access: issue(user_id, TokenType::Access, ACCESS_TTL_SECS, secret)?,
        refresh: issue(user_id, TokenType::Refresh, REFRESH_TTL_SECS, secret)?,
    })
}

/// Validate an HS256 token and return the decoded claims.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, String> {
    let validation = Validation::new(Algorithm::HS256);
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}
