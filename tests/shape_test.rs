mod common;

use common::{raw_artist, raw_track, raw_tracks};
use rewrapped::{error::Error, shape::*};
use serde_json::json;

#[test]
fn test_shape_tracks_preserves_length_and_order() {
    let raw = raw_tracks();
    let tracks = shape_tracks(&raw).unwrap();

    assert_eq!(tracks.len(), raw.len());
    let names: Vec<_> = tracks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["t0", "t1", "t2", "t3", "t4"]);
}

#[test]
fn test_shape_track_fields() {
    let track = &shape_tracks(&[raw_track("Song", 37)]).unwrap()[0];

    assert_eq!(track.name, "Song");
    assert_eq!(track.artist, "Song Artist, Guest");
    assert_eq!(track.album_name, "Song Album");
    assert_eq!(
        track.album_image_url.as_deref(),
        Some("https://i.scdn.co/image/Song")
    );
    assert_eq!(track.track_url, "https://open.spotify.com/track/Song");
    assert_eq!(track.preview_url, None);
    assert_eq!(track.popularity, 37);
}

#[test]
fn test_shape_artist_popularity_round_trip() {
    let artist = &shape_artists(&[raw_artist("Band", 37)]).unwrap()[0];

    assert_eq!(artist.popularity, 37);
    assert_eq!(artist.spotify_url, "https://open.spotify.com/artist/Band");
    // empty image list reads as unavailable
    assert_eq!(artist.image_url, None);
}

#[test]
fn test_shape_track_without_album_images() {
    let mut raw = raw_track("Bare", 5);
    raw["album"]
        .as_object_mut()
        .unwrap()
        .remove("images");
    raw["preview_url"] = json!("https://p.scdn.co/mp3-preview/bare");

    let track = &shape_tracks(&[raw]).unwrap()[0];
    assert_eq!(track.album_image_url, None);
    assert_eq!(
        track.preview_url.as_deref(),
        Some("https://p.scdn.co/mp3-preview/bare")
    );
}

#[test]
fn test_shape_track_without_artists_list() {
    let mut raw = raw_track("Solo", 5);
    raw.as_object_mut().unwrap().remove("artists");

    let track = &shape_tracks(&[raw]).unwrap()[0];
    assert_eq!(track.artist, "");
}

#[test]
fn test_missing_popularity_defaults_to_zero() {
    let mut raw = raw_artist("Quiet", 0);
    raw.as_object_mut().unwrap().remove("popularity");

    assert_eq!(shape_artists(&[raw]).unwrap()[0].popularity, 0);
}

#[test]
fn test_missing_name_fails_whole_batch() {
    let mut raw = raw_tracks();
    raw[3].as_object_mut().unwrap().remove("name");

    let err = shape_tracks(&raw).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedItem {
            index: 3,
            field: "name"
        }
    ));
}

#[test]
fn test_missing_artist_name_fails_whole_batch() {
    let raw = vec![
        raw_artist("ok", 10),
        json!({"popularity": 3, "external_urls": {"spotify": "x"}}),
    ];

    assert!(matches!(
        shape_artists(&raw),
        Err(Error::MalformedItem { index: 1, field: "name" })
    ));
}

#[test]
fn test_missing_album_name_is_malformed() {
    let mut raw = raw_track("NoAlbum", 1);
    raw["album"].as_object_mut().unwrap().remove("name");

    assert!(matches!(
        shape_tracks(&[raw]),
        Err(Error::MalformedItem {
            field: "album.name",
            ..
        })
    ));
}

#[test]
fn test_empty_input_shapes_to_empty_output() {
    assert!(shape_tracks(&[]).unwrap().is_empty());
    assert!(shape_artists(&[]).unwrap().is_empty());
}
