use rand::{Rng, distr::Alphanumeric};

use crate::types::{ArtistTableRow, ShapedArtist, ShapedTrack, TrackTableRow};

/// Length of the OAuth `state` value.
pub const STATE_LENGTH: usize = 16;

/// Random alphanumeric `state` for one login attempt.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_LENGTH)
        .map(char::from)
        .collect()
}

/// Popularity averages are shown with two decimals.
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

pub fn track_rows(tracks: &[ShapedTrack]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .enumerate()
        .map(|(idx, t)| TrackTableRow {
            rank: idx + 1,
            name: t.name.clone(),
            artist: t.artist.clone(),
            album: t.album_name.clone(),
            popularity: t.popularity,
        })
        .collect()
}

pub fn artist_rows(artists: &[ShapedArtist]) -> Vec<ArtistTableRow> {
    artists
        .iter()
        .enumerate()
        .map(|(idx, a)| ArtistTableRow {
            rank: idx + 1,
            name: a.name.clone(),
            popularity: a.popularity,
            url: a.spotify_url.clone(),
        })
        .collect()
}
