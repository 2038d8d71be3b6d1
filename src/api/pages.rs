use std::str::FromStr;

use axum::{
    Extension,
    extract::{Path, Query, rejection::QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    api::{AppState, error_response, render},
    management::{Action, Outcome, dispatch},
    spotify::auth::authorize_url,
    types::{DEFAULT_LIMIT, ItemType, TimeRange, TopItemsQuery},
};

#[derive(Debug, Default, Deserialize)]
pub struct TopItemsParams {
    pub time_range: Option<TimeRange>,
    pub limit: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NicheParams {
    pub time_range: Option<TimeRange>,
}

fn bad_query(rejection: QueryRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Html(render::notice(&rejection.body_text())),
    )
        .into_response()
}

pub async fn index(Extension(app): Extension<AppState>) -> Html<String> {
    let authenticated = app.session.lock().await.is_authenticated();
    Html(render::index(authenticated))
}

/// Starts a login attempt and sends the browser to Spotify.
pub async fn login(Extension(app): Extension<AppState>) -> Response {
    let state = app.session.lock().await.begin_login();

    match authorize_url(app.client.config(), &state) {
        Ok(url) => Redirect::to(url.as_str()).into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn top_items(
    Path(kind): Path<String>,
    params: Result<Query<TopItemsParams>, QueryRejection>,
    Extension(app): Extension<AppState>,
) -> Response {
    let Ok(item_type) = ItemType::from_str(&kind) else {
        return (
            StatusCode::NOT_FOUND,
            Html(render::notice(&format!("Unknown item type '{}'.", kind))),
        )
            .into_response();
    };
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return bad_query(rejection),
    };

    let time_range = params.time_range.unwrap_or_default();
    let query = TopItemsQuery::new(item_type, time_range)
        .with_limit(params.limit.unwrap_or(DEFAULT_LIMIT));

    let mut session = app.session.lock().await;
    match dispatch(&app.client, &mut session, Action::TopItems(query)).await {
        Ok(Outcome::Tracks(tracks)) => Html(render::tracks(&tracks, time_range)).into_response(),
        Ok(Outcome::Artists(artists)) => {
            Html(render::artists(&artists, time_range)).into_response()
        }
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn niche(
    params: Result<Query<NicheParams>, QueryRejection>,
    Extension(app): Extension<AppState>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return bad_query(rejection),
    };
    let time_range = params.time_range.unwrap_or_default();

    let mut session = app.session.lock().await;
    match dispatch(&app.client, &mut session, Action::Niche(time_range)).await {
        Ok(Outcome::Niche(report)) => Html(render::niche(&report)).into_response(),
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => error_response(&e),
    }
}
