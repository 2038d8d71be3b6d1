use crate::{
    error::{Error, Result},
    types::Token,
    utils,
};

/// Per-user session context.
///
/// Holds the access token once the authorization-code exchange succeeded and
/// the `state` value of the login currently in flight. The token is written
/// once; a session that got a 401 is expired and a new login starts a new
/// session.
#[derive(Debug, Default)]
pub struct Session {
    token: Option<Token>,
    pending_state: Option<String>,
    login_failure: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The bearer string for API calls.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unauthorized`] when nobody has logged in yet.
    pub fn access_token(&self) -> Result<&str> {
        self.token
            .as_ref()
            .map(|t| t.access_token.as_str())
            .ok_or_else(|| Error::Unauthorized("not logged in".to_string()))
    }

    /// Stores the token. Returns `false` and keeps the existing token if the
    /// session is already authenticated.
    pub fn set_token(&mut self, token: Token) -> bool {
        if self.token.is_some() {
            return false;
        }
        self.token = Some(token);
        true
    }

    /// Starts a login attempt and returns the `state` to send along.
    pub fn begin_login(&mut self) -> String {
        let state = utils::generate_state();
        self.pending_state = Some(state.clone());
        self.login_failure = None;
        state
    }

    /// Checks the `state` Spotify echoed back against the pending login.
    ///
    /// The pending value is consumed either way, so a state is good for one
    /// callback only. A code arriving while no login is pending was not
    /// requested by this session and is refused.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthExchange`] if no login is pending or the values
    /// differ.
    pub fn verify_state(&mut self, state: Option<&str>) -> Result<()> {
        match self.pending_state.take() {
            None => Err(Error::AuthExchange("no login in progress".to_string())),
            Some(expected) if state != Some(expected.as_str()) => Err(Error::AuthExchange(
                "state mismatch, restart the login".to_string(),
            )),
            Some(_) => Ok(()),
        }
    }

    /// Remembers why the last login attempt did not produce a token.
    pub fn fail_login(&mut self, reason: impl Into<String>) {
        self.login_failure = Some(reason.into());
    }

    /// Why the last login attempt failed, if it did.
    pub fn login_failure(&self) -> Option<&str> {
        self.login_failure.as_deref()
    }

    /// Ends the session after the provider rejected its token.
    pub fn expire(&mut self) {
        self.token = None;
        self.pending_state = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(value: &str) -> Token {
        Token {
            access_token: value.to_string(),
            scope: "user-top-read".to_string(),
            expires_in: 3600,
            obtained_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn token_is_written_once() {
        let mut session = Session::new();
        assert!(session.set_token(token("first")));
        assert!(!session.set_token(token("second")));
        assert_eq!(session.access_token().unwrap(), "first");
    }

    #[test]
    fn unauthenticated_session_has_no_bearer() {
        assert!(matches!(
            Session::new().access_token(),
            Err(Error::Unauthorized(_))
        ));
    }

    #[test]
    fn state_must_match_pending_login() {
        let mut session = Session::new();
        let state = session.begin_login();
        assert!(session.verify_state(Some(&state)).is_ok());

        session.begin_login();
        assert!(matches!(
            session.verify_state(Some("forged")),
            Err(Error::AuthExchange(_))
        ));

        session.begin_login();
        assert!(session.verify_state(None).is_err());
    }

    #[test]
    fn state_without_pending_login_is_refused() {
        let mut session = Session::new();
        assert!(matches!(
            session.verify_state(None),
            Err(Error::AuthExchange(_))
        ));
        assert!(session.verify_state(Some("anything")).is_err());

        // a state is only good for one callback
        let state = session.begin_login();
        assert!(session.verify_state(Some(&state)).is_ok());
        assert!(session.verify_state(Some(&state)).is_err());
    }

    #[test]
    fn new_login_clears_previous_failure() {
        let mut session = Session::new();
        session.fail_login("authorization denied");
        assert_eq!(session.login_failure(), Some("authorization denied"));

        session.begin_login();
        assert_eq!(session.login_failure(), None);
    }

    #[test]
    fn expire_allows_a_new_token() {
        let mut session = Session::new();
        session.set_token(token("old"));
        session.expire();
        assert!(!session.is_authenticated());
        assert!(session.set_token(token("new")));
    }
}
