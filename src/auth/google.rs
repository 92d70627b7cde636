use serde::Deserialize;
use tracing::debug;

use crate::error::ApiError;

const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Claims Google's tokeninfo endpoint returns for a valid ID token.
///
/// Numeric/boolean claims arrive as strings on this endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleClaims {
    /// Google's stable account id.
    pub sub: String,
    /// The OAuth client the token was minted for.
    pub aud: String,
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
    pub email_verified: Option<String>,
}

/// Verifies Google ID tokens for the `POST /google` social login.
#[derive(Clone)]
pub struct GoogleVerifier {
    client: reqwest::Client,
    client_id: String,
}

impl GoogleVerifier {
    pub fn new(client_id: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            client_id: client_id.to_string(),
        }
    }

    /// Validate an ID token against Google and check it was minted for this
    /// application.
    pub async fn verify(&self, id_token: &str) -> Result<GoogleClaims, ApiError> {
        debug!("Validating Google ID token via {TOKENINFO_URL}");

        let response = self
            .client
            .get(TOKENINFO_URL)
            .query(&[("id_token", id_token)])
            .send()
            .await
            .map_err(|e| ApiError::Upstream(format!("Failed to reach Google: {e}")))?;

        if !response.status().is_success() {
            return Err(ApiError::Unauthorized(
                "The token is invalid or expired. Please login again.".to_string(),
            ));
        }

        let claims: GoogleClaims = response
            .json()
            .await
            .map_err(|e| ApiError::Upstream(format!("Failed to parse Google response: {e}")))?;

        if claims.aud != self.client_id {
            return Err(ApiError::Unauthorized(
                "Token was not issued for this application".to_string(),
            ));
        }

        Ok(claims)
    }
}
