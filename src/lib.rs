//! Spotify (Re)Wrapped Library
//!
//! This library authenticates a user against the Spotify Web API with the OAuth
//! authorization-code flow, fetches the user's top tracks and artists and reshapes
//! them for display, and ranks them by how niche (unpopular) they are.
//!
//! # Modules
//!
//! - `api` - HTTP handlers and HTML rendering for the local web page
//! - `cli` - Command-line front end rendering results as tables
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared by every operation
//! - `management` - Session context and the action dispatcher
//! - `niche` - Popularity based uniqueness ranking
//! - `server` - Local HTTP server (web page and OAuth callback)
//! - `shape` - Raw JSON to display record mapping
//! - `spotify` - Spotify Web API client (token exchange, top items)
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use rewrapped::{config, management::{Action, Session, dispatch}, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> rewrapped::error::Result<()> {
//!     config::load_env().await?;
//!     let client = SpotifyClient::new(config::Config::from_env()?);
//!     let mut session = Session::default();
//!     let state = Some(session.begin_login());
//!     // send the user to `spotify::auth::authorize_url(..., state)`, then:
//!     dispatch(&client, &mut session, Action::Authenticate { code: "...".into(), state }).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod niche;
pub mod server;
pub mod shape;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Authentication successful!");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used by the binary for errors the user has to fix before trying
/// again (missing credentials, an expired session, a failed exchange).
/// Code after this macro does not execute.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Failed to open browser, open the URL manually");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
