//! Popularity based uniqueness ranking.
//!
//! Lower popularity reads as a more niche taste. Both functions are pure and
//! work on any shaped record exposing a popularity score.

use crate::{
    error::{Error, Result},
    types::{ShapedArtist, ShapedTrack},
};

/// How many items the niche ranking keeps.
pub const NICHE_RANK_SIZE: usize = 10;

/// An item carrying Spotify's 0 to 100 popularity score.
pub trait Popularity {
    fn popularity(&self) -> u8;
}

impl Popularity for ShapedTrack {
    fn popularity(&self) -> u8 {
        self.popularity
    }
}

impl Popularity for ShapedArtist {
    fn popularity(&self) -> u8 {
        self.popularity
    }
}

/// Returns the (at most) ten least popular items, least popular first.
///
/// The sort is stable, so items with equal popularity keep their input order.
pub fn rank_by_niche<T: Popularity + Clone>(items: &[T]) -> Vec<T> {
    let mut ranked = items.to_vec();
    ranked.sort_by_key(|item| item.popularity());
    ranked.truncate(NICHE_RANK_SIZE);
    ranked
}

/// Arithmetic mean popularity over all items.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for an empty slice.
pub fn average_popularity<T: Popularity>(items: &[T]) -> Result<f64> {
    if items.is_empty() {
        return Err(Error::EmptyInput);
    }

    let total: u64 = items.iter().map(|item| u64::from(item.popularity())).sum();
    Ok(total as f64 / items.len() as f64)
}
