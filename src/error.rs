//! Error types for every core operation.
//!
//! Each variant is terminal for the user action that triggered it. Nothing in
//! the crate retries on any of them; the render layers turn them into a
//! message for the user.

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The authorization code could not be exchanged for an access token.
    #[error("Token exchange failed: {0}")]
    AuthExchange(String),

    /// The provider rejected the bearer token. The user has to authorize again,
    /// there is no refresh path.
    #[error("Not authorized: {0}")]
    Unauthorized(String),

    /// Any other failed request against the Web API (status, transport, body).
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// A raw item lacked a field every shaped record needs. Fails the batch.
    #[error("Malformed item at index {index}: missing `{field}`")]
    MalformedItem { index: usize, field: &'static str },

    /// An aggregate was requested over no items.
    #[error("Cannot aggregate over an empty list")]
    EmptyInput,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the user must restart the authorization flow to recover.
    pub fn requires_reauth(&self) -> bool {
        matches!(self, Error::Unauthorized(_))
    }
}
