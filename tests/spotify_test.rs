mod common;

use std::time::Duration;

use common::*;
use rewrapped::{
    error::Error,
    spotify::SpotifyClient,
    types::{ItemType, TimeRange, TopItemsQuery},
};

async fn client() -> SpotifyClient {
    let base = spawn(provider()).await;
    SpotifyClient::new(config(&base))
}

fn tracks_query() -> TopItemsQuery {
    TopItemsQuery::new(ItemType::Tracks, TimeRange::LongTerm)
}

#[tokio::test]
async fn test_exchange_code_returns_token() {
    let token = client().await.exchange_code(GOOD_CODE).await.unwrap();

    assert_eq!(token.access_token, ACCESS_TOKEN);
    assert_eq!(token.scope, "user-top-read");
    assert_eq!(token.expires_in, 3600);
}

#[tokio::test]
async fn test_exchange_code_rejected() {
    let err = client().await.exchange_code("used-code").await.unwrap_err();

    match err {
        Error::AuthExchange(msg) => assert!(msg.contains("Invalid authorization code")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_exchange_code_without_access_token() {
    let err = client().await.exchange_code(NO_TOKEN_CODE).await.unwrap_err();
    assert!(matches!(err, Error::AuthExchange(_)));
}

#[tokio::test]
async fn test_exchange_code_with_wrong_secret() {
    let base = spawn(provider()).await;
    let mut config = config(&base);
    config.client_secret = "wrong".to_string();

    let err = SpotifyClient::new(config)
        .exchange_code(GOOD_CODE)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AuthExchange(_)));
}

#[tokio::test]
async fn test_exchange_code_transport_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = SpotifyClient::new(config(&format!("http://{}", addr)));
    assert!(matches!(
        client.exchange_code(GOOD_CODE).await,
        Err(Error::AuthExchange(_))
    ));
}

#[tokio::test]
async fn test_fetch_top_tracks() {
    let items = client()
        .await
        .fetch_top_items(ACCESS_TOKEN, &tracks_query())
        .await
        .unwrap();

    assert_eq!(items.len(), TRACK_POPULARITY.len());
    assert_eq!(items[0]["name"], "t0");
}

#[tokio::test]
async fn test_fetch_top_artists_sends_limit() {
    let query = TopItemsQuery::new(ItemType::Artists, TimeRange::MediumTerm).with_limit(2);
    let items = client()
        .await
        .fetch_top_items(ACCESS_TOKEN, &query)
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[1]["name"], "a1");
}

#[tokio::test]
async fn test_fetch_top_items_without_history() {
    let query = TopItemsQuery::new(ItemType::Tracks, TimeRange::ShortTerm);
    let items = client()
        .await
        .fetch_top_items(ACCESS_TOKEN, &query)
        .await
        .unwrap();

    assert!(items.is_empty());
}

#[tokio::test]
async fn test_fetch_top_items_missing_items_key() {
    let items = client()
        .await
        .fetch_top_items("no-items-key", &tracks_query())
        .await
        .unwrap();

    assert!(items.is_empty());
}

#[tokio::test]
async fn test_fetch_top_items_unauthorized() {
    let err = client()
        .await
        .fetch_top_items("expired", &tracks_query())
        .await
        .unwrap_err();

    match err {
        Error::Unauthorized(msg) => assert!(msg.contains("expired")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_top_items_empty_token() {
    let err = client()
        .await
        .fetch_top_items("", &tracks_query())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Unauthorized(_)));
}

#[tokio::test]
async fn test_fetch_top_items_server_error() {
    let err = client()
        .await
        .fetch_top_items("server-error", &tracks_query())
        .await
        .unwrap_err();

    match err {
        Error::ApiRequest(msg) => assert!(msg.contains("503")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_top_items_timeout() {
    let base = spawn(provider()).await;
    let http = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let client = SpotifyClient::with_http_client(config(&base), http);

    let err = client
        .fetch_top_items("slow", &tracks_query())
        .await
        .unwrap_err();

    match err {
        Error::ApiRequest(msg) => assert!(msg.contains("timed out")),
        other => panic!("unexpected error: {:?}", other),
    }
}
