use axum::{
    Extension,
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    api::{AppState, ServerMode, error_response, render},
    error::Error,
    management::{Action, Outcome, dispatch},
    warning,
};

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    /// Set by Spotify instead of `code` when the user denied access.
    pub error: Option<String>,
}

/// Completes the authorization-code flow.
///
/// Spotify redirects here with `code` and `state` after the user consented.
/// The code is exchanged exactly once; a session that is already
/// authenticated ignores further codes. Codes that do not belong to a login
/// started by [`super::login`] or the terminal are refused.
pub async fn callback(
    Query(params): Query<CallbackParams>,
    Extension(app): Extension<AppState>,
) -> Response {
    let mut session = app.session.lock().await;

    if let Some(reason) = params.error {
        warning!("Authorization denied: {}", reason);
        let err = Error::AuthExchange(format!("authorization denied ({})", reason));
        session.fail_login(err.to_string());
        return error_response(&err);
    }

    let Some(code) = params.code else {
        session.fail_login("callback without authorization code");
        return (
            StatusCode::BAD_REQUEST,
            Html(render::notice("Missing authorization code.")),
        )
            .into_response();
    };

    let action = Action::Authenticate {
        code,
        state: params.state,
    };

    match dispatch(&app.client, &mut session, action).await {
        Ok(Outcome::Authenticated) | Ok(Outcome::AlreadyAuthenticated) => match app.mode {
            ServerMode::Web => Redirect::to("/").into_response(),
            ServerMode::CallbackOnly => Html(render::login_complete()).into_response(),
        },
        Ok(other) => {
            tracing::error!(?other, "unexpected outcome for authentication");
            Redirect::to("/").into_response()
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            error_response(&e)
        }
    }
}
