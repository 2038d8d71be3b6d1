use std::{net::SocketAddr, str::FromStr};

use axum::{Extension, Router, routing::get};
use tokio::net::TcpListener;

use crate::{
    api::{self, AppState},
    error::{Error, Result},
};

/// Builds the router serving the page, the OAuth callback and health.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/top/{kind}", get(api::top_items))
        .route("/niche", get(api::niche))
        .route("/health", get(api::health))
        .layer(Extension(state))
}

/// Binds the configured server address.
///
/// # Errors
///
/// Returns [`Error::Config`] for an unparsable address and [`Error::Io`]
/// when the port cannot be bound.
pub async fn bind(addr: &str) -> Result<TcpListener> {
    let addr = SocketAddr::from_str(addr)
        .map_err(|e| Error::Config(format!("invalid server address {}: {}", addr, e)))?;
    Ok(TcpListener::bind(&addr).await?)
}

/// Serves the application on an already bound listener until the process ends.
pub async fn start_api_server(listener: TcpListener, state: AppState) -> Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "server listening");
    }
    axum::serve(listener, router(state)).await?;
    Ok(())
}
