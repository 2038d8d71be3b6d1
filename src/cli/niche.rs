use tabled::Table;

use crate::{
    config::Config,
    info,
    management::{Action, Outcome, dispatch},
    types::TimeRange,
    utils,
};

/// Prints how niche the user's taste is: both popularity averages and the
/// ten least popular tracks and artists.
pub async fn niche(config: &Config, time_range: TimeRange) {
    let app = super::authenticate(config).await;

    let pb = super::spinner("Calculating your niche score...");
    let result = {
        let mut session = app.session.lock().await;
        dispatch(&app.client, &mut session, Action::Niche(time_range)).await
    };
    pb.finish_and_clear();

    let report = match result {
        Ok(Outcome::Niche(report)) => report,
        Ok(_) => return,
        Err(e) => super::fail(e),
    };

    info!("How niche is your music taste? ({})", time_range.label());
    info!(
        "Average track popularity: {}",
        utils::format_score(report.average_track_popularity)
    );
    info!(
        "Average artist popularity: {}",
        utils::format_score(report.average_artist_popularity)
    );
    info!("Lower scores indicate a more niche taste, higher ones follow popular trends.");

    info!("Your Top 10 Unique Tracks:");
    println!("{}", Table::new(utils::track_rows(&report.unique_tracks)));
    info!("Your Top 10 Unique Artists:");
    println!("{}", Table::new(utils::artist_rows(&report.unique_artists)));
}
