use jiff::Timestamp;
use serde::Deserialize;
use tracing::debug;

use crate::error::AuthError;
use crate::token::SecurityToken;

/// Source of fresh tokens. The HTTP implementation talks to the token
/// endpoint; tests substitute scripted fakes.
pub trait TokenFetcher: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<SecurityToken, AuthError>> + Send;
}

/// Wire shape of the token endpoint: `{ token, expiresAt }`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    token: String,
    expires_at: Timestamp,
}

/// Fetches tokens from the backend's token endpoint with a GET.
pub struct HttpTokenFetcher {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpTokenFetcher {
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        HttpTokenFetcher {
            http,
            endpoint: endpoint.into(),
        }
    }
}

impl TokenFetcher for HttpTokenFetcher {
    async fn fetch(&self) -> Result<SecurityToken, AuthError> {
        debug!(endpoint = %self.endpoint, "fetching anti-forgery token");

        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| AuthError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Fetch(format!(
                "token endpoint returned {status}"
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;

        Ok(SecurityToken {
            value: body.token,
            issued_at: Timestamp::now(),
            expires_at: body.expires_at,
        })
    }
}
