//! # API Module
//!
//! HTTP handlers for the local web server. The server doubles as the
//! interactive page (login link, action buttons, result lists) and as the
//! OAuth redirect target.
//!
//! ## Endpoints
//!
//! - [`index`] - `GET /`, login link or the action buttons
//! - [`login`] - `GET /login`, starts a login and redirects to Spotify
//! - [`callback`] - `GET /callback`, completes the authorization-code flow
//! - [`top_items`] - `GET /top/{tracks|artists}`, numbered list of top items
//! - [`niche`] - `GET /niche`, popularity averages and the most niche items
//! - [`health`] - `GET /health`, status and version JSON
//!
//! ## State
//!
//! Handlers share an [`AppState`] through an axum `Extension`. It carries the
//! Spotify client and the one [`Session`] of the running server. Handlers only
//! translate requests into [`crate::management::Action`]s and render the
//! outcome with [`render`].

mod callback;
mod health;
mod pages;
pub mod render;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tokio::sync::Mutex;

use crate::{error::Error, management::Session, spotify::SpotifyClient};

pub use callback::callback;
pub use health::health;
pub use pages::{index, login, niche, top_items};

/// How the callback finishes a successful login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerMode {
    /// The browser is the front end: redirect to the page.
    Web,
    /// The terminal is the front end: tell the user to close the window.
    CallbackOnly,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub client: Arc<SpotifyClient>,
    pub session: Arc<Mutex<Session>>,
    pub mode: ServerMode,
}

impl AppState {
    pub fn new(client: SpotifyClient, mode: ServerMode) -> Self {
        Self {
            client: Arc::new(client),
            session: Arc::new(Mutex::new(Session::new())),
            mode,
        }
    }
}

/// Renders an error page with a status matching the failure.
pub(crate) fn error_response(err: &Error) -> Response {
    let status = match err {
        Error::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        Error::AuthExchange(_) => StatusCode::BAD_REQUEST,
        Error::ApiRequest(_) | Error::MalformedItem { .. } => StatusCode::BAD_GATEWAY,
        Error::EmptyInput => StatusCode::OK,
        Error::Config(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Html(render::error(err))).into_response()
}
