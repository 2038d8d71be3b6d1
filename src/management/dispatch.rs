use crate::{
    error::Result,
    management::Session,
    niche, shape,
    spotify::SpotifyClient,
    types::{ItemType, NicheReport, ShapedArtist, ShapedTrack, TimeRange, TopItemsQuery},
};

/// Everything a user can ask for.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Finish the login with the code (and state) from the OAuth redirect.
    Authenticate { code: String, state: Option<String> },
    /// Show the user's top tracks or artists.
    TopItems(TopItemsQuery),
    /// Show how niche the user's taste is for a time range.
    Niche(TimeRange),
}

/// What a front end gets back to render.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Authenticated,
    /// The session already held a token, the code was not exchanged.
    AlreadyAuthenticated,
    Tracks(Vec<ShapedTrack>),
    Artists(Vec<ShapedArtist>),
    Niche(NicheReport),
}

/// Runs one action against the session.
///
/// Item actions need an authenticated session. When Spotify rejects the
/// token the session is expired before the error is returned, so the next
/// login starts over. A failed login is recorded on the session for front
/// ends waiting on the callback.
///
/// # Errors
///
/// Propagates every error of the underlying operation unchanged.
pub async fn dispatch(
    client: &SpotifyClient,
    session: &mut Session,
    action: Action,
) -> Result<Outcome> {
    let result = run(client, session, action).await;

    if let Err(e) = &result {
        if e.requires_reauth() && session.is_authenticated() {
            tracing::info!("access token rejected, ending session");
            session.expire();
        }
    }

    result
}

async fn run(client: &SpotifyClient, session: &mut Session, action: Action) -> Result<Outcome> {
    match action {
        Action::Authenticate { code, state } => {
            if session.is_authenticated() {
                return Ok(Outcome::AlreadyAuthenticated);
            }

            match authenticate(client, session, &code, state.as_deref()).await {
                Ok(()) => Ok(Outcome::Authenticated),
                Err(e) => {
                    session.fail_login(e.to_string());
                    Err(e)
                }
            }
        }
        Action::TopItems(query) => {
            let items = client
                .fetch_top_items(session.access_token()?, &query)
                .await?;

            match query.item_type {
                ItemType::Tracks => Ok(Outcome::Tracks(shape::shape_tracks(&items)?)),
                ItemType::Artists => Ok(Outcome::Artists(shape::shape_artists(&items)?)),
            }
        }
        Action::Niche(time_range) => {
            let token = session.access_token()?;

            let raw_tracks = client
                .fetch_top_items(token, &TopItemsQuery::new(ItemType::Tracks, time_range))
                .await?;
            let raw_artists = client
                .fetch_top_items(token, &TopItemsQuery::new(ItemType::Artists, time_range))
                .await?;

            let tracks = shape::shape_tracks(&raw_tracks)?;
            let artists = shape::shape_artists(&raw_artists)?;

            Ok(Outcome::Niche(NicheReport {
                time_range,
                average_track_popularity: niche::average_popularity(&tracks)?,
                average_artist_popularity: niche::average_popularity(&artists)?,
                unique_tracks: niche::rank_by_niche(&tracks),
                unique_artists: niche::rank_by_niche(&artists),
            }))
        }
    }
}

async fn authenticate(
    client: &SpotifyClient,
    session: &mut Session,
    code: &str,
    state: Option<&str>,
) -> Result<()> {
    session.verify_state(state)?;
    let token = client.exchange_code(code).await?;
    session.set_token(token);
    tracing::info!("authenticated with Spotify");
    Ok(())
}
