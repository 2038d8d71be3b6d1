//! Maps raw Spotify item JSON into flat display records.
//!
//! Shaping is all-or-nothing per batch: one item without a required field
//! fails the whole call with [`Error::MalformedItem`], so the page never shows
//! a partial list. Optional fields (images, preview URL) become `None`.

use serde_json::Value;

use crate::{
    error::{Error, Result},
    types::{ShapedArtist, ShapedTrack},
};

/// Shapes raw track items, preserving their order.
pub fn shape_tracks(items: &[Value]) -> Result<Vec<ShapedTrack>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| shape_track(index, item))
        .collect()
}

/// Shapes raw artist items, preserving their order.
pub fn shape_artists(items: &[Value]) -> Result<Vec<ShapedArtist>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| shape_artist(index, item))
        .collect()
}

fn shape_track(index: usize, item: &Value) -> Result<ShapedTrack> {
    let artist = item["artists"]
        .as_array()
        .map(|artists| {
            artists
                .iter()
                .filter_map(|a| a["name"].as_str())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();

    Ok(ShapedTrack {
        name: required(item, "/name", index, "name")?,
        artist,
        album_name: required(item, "/album/name", index, "album.name")?,
        album_image_url: first_image(&item["album"]),
        track_url: required(item, "/external_urls/spotify", index, "external_urls.spotify")?,
        preview_url: optional(item, "/preview_url"),
        popularity: popularity(item),
    })
}

fn shape_artist(index: usize, item: &Value) -> Result<ShapedArtist> {
    Ok(ShapedArtist {
        name: required(item, "/name", index, "name")?,
        image_url: first_image(item),
        spotify_url: required(item, "/external_urls/spotify", index, "external_urls.spotify")?,
        popularity: popularity(item),
    })
}

/// Popularity clamped to `0..=100`; absent or negative values read as 0.
pub fn popularity(item: &Value) -> u8 {
    let value = &item["popularity"];
    value
        .as_u64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|p| p.is_finite() && *p >= 0.0)
                .map(|p| p.round() as u64)
        })
        .map(|p| p.min(100) as u8)
        .unwrap_or(0)
}

fn required(item: &Value, pointer: &str, index: usize, field: &'static str) -> Result<String> {
    item.pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(Error::MalformedItem { index, field })
}

fn optional(item: &Value, pointer: &str) -> Option<String> {
    item.pointer(pointer)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// Spotify lists images largest first.
fn first_image(item: &Value) -> Option<String> {
    optional(item, "/images/0/url")
}
