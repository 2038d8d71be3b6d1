use std::time::{Duration, Instant};

use crate::{
    api::{AppState, ServerMode},
    config::Config,
    error, info,
    server::{bind, start_api_server},
    spotify::{SpotifyClient, auth::authorize_url},
    success, warning,
};

/// How long the terminal waits for the browser round trip.
const LOGIN_TIMEOUT: Duration = Duration::from_secs(60);
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Runs the authorization-code flow for a terminal session.
///
/// 1. Starts the callback server on `SERVER_ADDRESS`
/// 2. Opens the authorization URL in the default browser
/// 3. Waits until the callback exchanged the code (60 s at most)
///
/// Returns the server state holding the authenticated session. Exits the
/// process when the server cannot start or the login does not complete.
pub async fn authenticate(config: &Config) -> AppState {
    let listener = match bind(&config.server_addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Cannot start callback server: {}", e),
    };

    let state = AppState::new(SpotifyClient::new(config.clone()), ServerMode::CallbackOnly);
    let server_state = state.clone();
    tokio::spawn(async move {
        if let Err(e) = start_api_server(listener, server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    let login_state = state.session.lock().await.begin_login();
    let auth_url = match authorize_url(config, &login_state) {
        Ok(url) => url,
        Err(e) => error!("{}", e),
    };

    info!("Opening Spotify in your browser to log in...");
    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let pb = super::spinner("Waiting for Spotify authorization...");
    let login = wait_for_token(&state, LOGIN_TIMEOUT).await;
    pb.finish_and_clear();

    match login {
        Login::Done => success!("Authentication successful!"),
        Login::Failed(reason) => error!("Authentication failed: {}", reason),
        Login::TimedOut => error!("Authentication timed out."),
    }

    state
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Login {
    Done,
    Failed(String),
    TimedOut,
}

/// Polls the session until the callback stored a token, recorded a failed
/// login, or the timeout hits.
pub(crate) async fn wait_for_token(state: &AppState, timeout: Duration) -> Login {
    let start = Instant::now();

    while start.elapsed() < timeout {
        {
            let session = state.session.lock().await;
            if session.is_authenticated() {
                return Login::Done;
            }
            if let Some(reason) = session.login_failure() {
                return Login::Failed(reason.to_string());
            }
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }

    Login::TimedOut
}
