//! Configuration management for Spotify (Re)Wrapped.
//!
//! This module handles loading configuration values from environment variables
//! and `.env` files. Client credentials are deployment-time values and never
//! live in the source tree.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (endpoints, scope, server address)

use std::{env, path::PathBuf};

use crate::error::{Error, Result};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8501";
pub const DEFAULT_SCOPE: &str = "user-top-read";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory structure if it doesn't exist and loads variables
/// from `rewrapped/.env` below the platform-specific local data directory:
/// - Linux: `~/.local/share/rewrapped/.env`
/// - macOS: `~/Library/Application Support/rewrapped/.env`
/// - Windows: `%LOCALAPPDATA%/rewrapped/.env`
///
/// A missing file is not an error, the process environment may carry every
/// value already. Variables already set in the environment win.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or an existing `.env`
/// file cannot be parsed.
pub async fn load_env() -> Result<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path)
            .map_err(|e| Error::Config(format!("cannot load {}: {}", path.display(), e)))?;
    }
    Ok(())
}

/// Location of the `.env` file read by [`load_env`].
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("rewrapped/.env");
    path
}

/// Runtime configuration: credentials, endpoints and the local server address.
#[derive(Clone)]
pub struct Config {
    /// Address the local web server binds to, e.g. `127.0.0.1:8501`.
    pub server_addr: String,
    pub client_id: String,
    pub client_secret: String,
    /// Must exactly match the redirect URI registered with Spotify.
    pub redirect_uri: String,
    pub scope: String,
    /// Authorization endpoint the browser is sent to.
    pub auth_url: String,
    /// Token endpoint receiving the code exchange.
    pub token_url: String,
    /// Web API base, e.g. `https://api.spotify.com/v1`.
    pub api_url: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when `SPOTIFY_API_AUTH_CLIENT_ID` or
    /// `SPOTIFY_API_AUTH_CLIENT_SECRET` is missing or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values count as missing, so a blank line in `.env` falls back to
    /// the default just like an absent one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| {
            get(key).ok_or_else(|| Error::Config(format!("{} must be set", key)))
        };

        let server_addr =
            get("SERVER_ADDRESS").unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string());
        let redirect_uri = get("SPOTIFY_API_REDIRECT_URI")
            .unwrap_or_else(|| format!("http://{}/callback", server_addr));

        Ok(Self {
            client_id: require("SPOTIFY_API_AUTH_CLIENT_ID")?,
            client_secret: require("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            redirect_uri,
            scope: get("SPOTIFY_API_AUTH_SCOPE").unwrap_or_else(|| DEFAULT_SCOPE.to_string()),
            auth_url: get("SPOTIFY_API_AUTH_URL").unwrap_or_else(|| DEFAULT_AUTH_URL.to_string()),
            token_url: get("SPOTIFY_API_TOKEN_URL")
                .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            api_url: get("SPOTIFY_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            server_addr,
        })
    }
}

// Keeps the client secret out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("server_addr", &self.server_addr)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("scope", &self.scope)
            .field("auth_url", &self.auth_url)
            .field("token_url", &self.token_url)
            .field("api_url", &self.api_url)
            .finish()
    }
}
