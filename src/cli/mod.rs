//! # CLI Module
//!
//! Terminal front end for Spotify (Re)Wrapped. Every command is one session:
//! it runs the authorization-code flow (local callback server plus browser),
//! dispatches a single action and prints the outcome as a table.
//!
//! ## Commands
//!
//! - [`serve`] - runs the interactive web page instead of a terminal session
//! - [`top`] - prints the user's top tracks or artists
//! - [`niche`] - prints popularity averages and the ten most niche items
//!
//! ## Usage
//!
//! ```bash
//! rewrapped serve --open                       # web page on SERVER_ADDRESS
//! rewrapped top tracks --time-range short-term # last four weeks
//! rewrapped top artists --limit 50
//! rewrapped niche --time-range medium-term
//! ```
//!
//! Errors end the process through the crate's `error!` macro. An expired or
//! rejected token asks the user to run the command again, which logs in anew.

mod auth;
mod niche;
mod serve;
mod top;

pub use auth::authenticate;
pub use niche::niche;
pub use serve::serve;
pub use top::top;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error, error::Error};

pub(crate) fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

pub(crate) fn fail(err: Error) -> ! {
    if err.requires_reauth() {
        error!("{}. Run the command again to log in.", err);
    }
    error!("{}", err);
}
