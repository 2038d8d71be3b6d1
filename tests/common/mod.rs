#![allow(dead_code)]

use std::{collections::HashMap, time::Duration};

use axum::{
    Form, Json, Router,
    extract::{Path, Query},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rewrapped::config::Config;
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const GOOD_CODE: &str = "good-code";
pub const STALE_CODE: &str = "stale-code";
pub const NO_TOKEN_CODE: &str = "no-token";
/// Logs in with a token whose top tracks contain an item without a name.
pub const MALFORMED_CODE: &str = "malformed-code";
pub const ACCESS_TOKEN: &str = "token-123";
pub const REDIRECT_URI: &str = "http://127.0.0.1:8501/callback";

pub const TRACK_POPULARITY: [u64; 5] = [80, 10, 55, 99, 3];
pub const ARTIST_POPULARITY: [u64; 4] = [70, 20, 20, 90];

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Config pointing every Spotify endpoint at `base`.
pub fn config(base: &str) -> Config {
    Config {
        server_addr: "127.0.0.1:8501".to_string(),
        client_id: "client-id".to_string(),
        client_secret: "secret".to_string(),
        redirect_uri: REDIRECT_URI.to_string(),
        scope: "user-top-read".to_string(),
        auth_url: format!("{}/authorize", base),
        token_url: format!("{}/api/token", base),
        api_url: format!("{}/v1", base),
    }
}

pub fn raw_track(name: &str, popularity: u64) -> Value {
    json!({
        "name": name,
        "artists": [{"name": format!("{} Artist", name)}, {"name": "Guest"}],
        "album": {
            "name": format!("{} Album", name),
            "images": [{"url": format!("https://i.scdn.co/image/{}", name)}]
        },
        "external_urls": {"spotify": format!("https://open.spotify.com/track/{}", name)},
        "preview_url": null,
        "popularity": popularity
    })
}

pub fn raw_artist(name: &str, popularity: u64) -> Value {
    json!({
        "name": name,
        "images": [],
        "external_urls": {"spotify": format!("https://open.spotify.com/artist/{}", name)},
        "popularity": popularity
    })
}

pub fn raw_tracks() -> Vec<Value> {
    TRACK_POPULARITY
        .iter()
        .enumerate()
        .map(|(i, p)| raw_track(&format!("t{}", i), *p))
        .collect()
}

pub fn raw_artists() -> Vec<Value> {
    ARTIST_POPULARITY
        .iter()
        .enumerate()
        .map(|(i, p)| raw_artist(&format!("a{}", i), *p))
        .collect()
}

async fn token(Form(form): Form<HashMap<String, String>>) -> Response {
    let field = |key: &str| form.get(key).map(String::as_str).unwrap_or_default();

    let valid_client = field("grant_type") == "authorization_code"
        && field("client_id") == "client-id"
        && field("client_secret") == "secret"
        && field("redirect_uri") == REDIRECT_URI;
    if !valid_client {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "invalid_client", "error_description": "Invalid client"})),
        )
            .into_response();
    }

    match field("code") {
        GOOD_CODE => Json(json!({
            "access_token": ACCESS_TOKEN,
            "token_type": "Bearer",
            "scope": "user-top-read",
            "expires_in": 3600,
            "refresh_token": "refresh"
        }))
        .into_response(),
        STALE_CODE => Json(json!({"access_token": "stale", "token_type": "Bearer"})).into_response(),
        NO_TOKEN_CODE => Json(json!({"token_type": "Bearer"})).into_response(),
        MALFORMED_CODE => {
            Json(json!({"access_token": "malformed", "token_type": "Bearer"})).into_response()
        }
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "invalid_grant", "error_description": "Invalid authorization code"})),
        )
            .into_response(),
    }
}

async fn top(
    Path(kind): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .unwrap_or_default()
        .to_string();

    match bearer.as_str() {
        ACCESS_TOKEN => {}
        "slow" => tokio::time::sleep(Duration::from_secs(2)).await,
        "server-error" => {
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"error": {"status": 503, "message": "Service unavailable"}})),
            )
                .into_response();
        }
        "malformed" => {
            let mut items = raw_tracks();
            items[2].as_object_mut().unwrap().remove("name");
            return Json(json!({ "items": items })).into_response();
        }
        "no-items-key" => return Json(json!({"total": 0})).into_response(),
        _ => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": {"status": 401, "message": "The access token expired"}})),
            )
                .into_response();
        }
    }

    // No listening history in the short window.
    if query.get("time_range").map(String::as_str) == Some("short_term") {
        return Json(json!({ "items": [] })).into_response();
    }

    let limit: usize = query
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(20);
    let items: Vec<Value> = match kind.as_str() {
        "tracks" => raw_tracks(),
        "artists" => raw_artists(),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };

    Json(json!({
        "items": items.into_iter().take(limit).collect::<Vec<_>>(),
        "limit": limit
    }))
    .into_response()
}

/// Fake Spotify accounts service and Web API.
pub fn provider() -> Router {
    Router::new()
        .route("/api/token", post(token))
        .route("/v1/me/top/{kind}", get(top))
}
