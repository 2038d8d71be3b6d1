//! # Spotify Integration Module
//!
//! This module is the only place that talks to Spotify. It covers the two
//! network calls the application makes:
//!
//! ```text
//! Application Layer (web page, CLI)
//!          ↓
//! Session dispatcher
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (authorization-code exchange)
//!     └── Top items (tracks, artists)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Accounts service / Web API
//! ```
//!
//! ## Authentication
//!
//! [`auth`] builds the authorization URL the browser is sent to and exchanges
//! the returned code for an access token. The application is a confidential
//! client, so the exchange carries the client secret in the form body.
//!
//! ## Top Items
//!
//! [`top`] fetches `GET /me/top/{tracks|artists}` for a time range. The items
//! come back as raw JSON; [`crate::shape`] turns them into display records.
//!
//! ## Error Handling
//!
//! Every call is attempted exactly once. Failures map onto
//! [`crate::error::Error`]:
//! - exchange failures of any kind become `AuthExchange`
//! - `401 Unauthorized` from the Web API becomes `Unauthorized`
//! - every other failed Web API call becomes `ApiRequest`
//!
//! There is no token refresh and no rate-limit handling. An expired token
//! means the user authorizes again.

pub mod auth;
pub mod top;

use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::config::Config;

/// HTTP client bound to one deployment's credentials and endpoints.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    config: Config,
}

impl SpotifyClient {
    pub fn new(config: Config) -> Self {
        Self::with_http_client(config, Client::new())
    }

    /// Uses a preconfigured reqwest client, e.g. one with a request timeout.
    pub fn with_http_client(config: Config, http: Client) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Builds a readable message for a failed response.
///
/// Understands both error shapes Spotify uses: the accounts service's
/// `{"error": "...", "error_description": "..."}` and the Web API's
/// `{"error": {"status": 401, "message": "..."}}`.
pub(crate) fn describe_failure(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<Value>(body).ok().and_then(|json| {
        json["error_description"]
            .as_str()
            .or_else(|| json["error"]["message"].as_str())
            .or_else(|| json["error"].as_str())
            .map(str::to_string)
    });

    match detail {
        Some(detail) => format!("{} ({})", status, detail),
        None => status.to_string(),
    }
}

/// Message for a request that never produced a response.
pub(crate) fn describe_transport(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {}", err)
    } else if err.is_connect() {
        format!("connection failed: {}", err)
    } else {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_accounts_service_errors() {
        let msg = describe_failure(
            StatusCode::BAD_REQUEST,
            r#"{"error":"invalid_grant","error_description":"Invalid authorization code"}"#,
        );
        assert_eq!(msg, "400 Bad Request (Invalid authorization code)");
    }

    #[test]
    fn describes_web_api_errors() {
        let msg = describe_failure(
            StatusCode::UNAUTHORIZED,
            r#"{"error":{"status":401,"message":"The access token expired"}}"#,
        );
        assert_eq!(msg, "401 Unauthorized (The access token expired)");
    }

    #[test]
    fn falls_back_to_status_for_unknown_bodies() {
        assert_eq!(
            describe_failure(StatusCode::BAD_GATEWAY, "<html>oops</html>"),
            "502 Bad Gateway"
        );
    }
}
