//! Session state and the single entry point every front end drives.
//!
//! The web page and the CLI never call the Spotify client directly. They
//! translate user input into an [`Action`], hand it to [`dispatch`] together
//! with the [`Session`] they own, and render the returned [`Outcome`].

mod dispatch;
mod session;

pub use dispatch::Action;
pub use dispatch::Outcome;
pub use dispatch::dispatch;
pub use session::Session;
