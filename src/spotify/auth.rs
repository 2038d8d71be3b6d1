use chrono::Utc;
use reqwest::Url;
use serde_json::Value;

use crate::{
    config::Config,
    error::{Error, Result},
    spotify::{SpotifyClient, describe_failure, describe_transport},
    types::Token,
};

/// Builds the URL the user's browser is sent to for granting access.
///
/// The query carries `client_id`, `response_type=code`, `redirect_uri`,
/// `scope` and the anti-forgery `state`, all properly encoded. Spotify
/// redirects back to `redirect_uri` with `code` and the same `state`.
///
/// # Errors
///
/// Returns [`Error::Config`] if the configured authorization URL is not a
/// valid URL.
pub fn authorize_url(config: &Config, state: &str) -> Result<Url> {
    Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("scope", config.scope.as_str()),
            ("state", state),
        ],
    )
    .map_err(|e| Error::Config(format!("invalid authorization URL {}: {}", config.auth_url, e)))
}

impl SpotifyClient {
    /// Exchanges an authorization code for an access token.
    ///
    /// Issues a single form-encoded POST to the token endpoint carrying the
    /// code, the redirect URI and the client credentials. Codes are single
    /// use, so a failed exchange is never retried.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthExchange`] when:
    /// - the code is empty (no request is made)
    /// - the request fails in transport
    /// - the token endpoint answers with a non-2xx status
    /// - the response body is not JSON or lacks `access_token`
    pub async fn exchange_code(&self, code: &str) -> Result<Token> {
        if code.trim().is_empty() {
            return Err(Error::AuthExchange("authorization code is empty".to_string()));
        }

        let config = &self.config;
        tracing::debug!(token_url = %config.token_url, "exchanging authorization code");

        let res = self
            .http
            .post(&config.token_url)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", config.redirect_uri.as_str()),
                ("client_id", config.client_id.as_str()),
                ("client_secret", config.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::AuthExchange(describe_transport(&e)))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::warn!(%status, "token endpoint rejected the authorization code");
            return Err(Error::AuthExchange(describe_failure(status, &body)));
        }

        let json: Value = res
            .json()
            .await
            .map_err(|e| Error::AuthExchange(format!("invalid token response: {}", e)))?;

        token_from_json(&json)
    }
}

fn token_from_json(json: &Value) -> Result<Token> {
    let access_token = json["access_token"]
        .as_str()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| Error::AuthExchange("response has no access_token".to_string()))?;

    Ok(Token {
        access_token: access_token.to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_u64().unwrap_or(3600),
        obtained_at: Utc::now(),
    })
}
