use crate::{
    api::{AppState, ServerMode},
    config::Config,
    error, info,
    server::{bind, start_api_server},
    spotify::SpotifyClient,
    warning,
};

/// Serves the interactive web page until the process is stopped.
pub async fn serve(config: Config, open: bool) {
    let listener = match bind(&config.server_addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Cannot start server: {}", e),
    };

    let url = format!("http://{}/", config.server_addr);
    info!("Serving Spotify (Re)Wrapped on {}", url);
    info!("Redirect URI registered with Spotify must be {}", config.redirect_uri);

    if open && webbrowser::open(&url).is_err() {
        warning!("Failed to open browser. Please navigate to {} manually.", url);
    }

    let state = AppState::new(SpotifyClient::new(config), ServerMode::Web);
    if let Err(e) = start_api_server(listener, state).await {
        error!("Server stopped: {}", e);
    }
}
