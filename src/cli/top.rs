use tabled::Table;

use crate::{
    config::Config,
    info,
    management::{Action, Outcome, dispatch},
    types::TopItemsQuery,
    utils,
};

/// Prints the user's top tracks or artists for a time range.
pub async fn top(config: &Config, query: TopItemsQuery) {
    let app = super::authenticate(config).await;

    let pb = super::spinner(format!("Fetching top {}...", query.item_type));
    let result = {
        let mut session = app.session.lock().await;
        dispatch(&app.client, &mut session, Action::TopItems(query)).await
    };
    pb.finish_and_clear();

    match result {
        Ok(Outcome::Tracks(tracks)) if tracks.is_empty() => {
            info!("No listening history for {}.", query.time_range.label())
        }
        Ok(Outcome::Artists(artists)) if artists.is_empty() => {
            info!("No listening history for {}.", query.time_range.label())
        }
        Ok(Outcome::Tracks(tracks)) => {
            info!("Your Top Tracks ({}):", query.time_range.label());
            println!("{}", Table::new(utils::track_rows(&tracks)));
        }
        Ok(Outcome::Artists(artists)) => {
            info!("Your Top Artists ({}):", query.time_range.label());
            println!("{}", Table::new(utils::artist_rows(&artists)));
        }
        Ok(_) => {}
        Err(e) => super::fail(e),
    }
}
