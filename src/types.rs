use std::{fmt, str::FromStr};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Number of items Spotify returns when no limit is given.
pub const DEFAULT_LIMIT: u32 = 20;
/// Largest limit a top-items request accepts.
pub const MAX_LIMIT: u32 = 100;

/// Access token obtained from the authorization-code exchange.
///
/// `scope` is what the user actually granted, which can be narrower than
/// what was requested.
#[derive(Clone)]
pub struct Token {
    pub access_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: DateTime<Utc>,
}

impl Token {
    /// When Spotify stops accepting the token. Not refreshed, only reported.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.obtained_at + Duration::seconds(self.expires_in as i64)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"<redacted>")
            .field("scope", &self.scope)
            .field("expires_in", &self.expires_in)
            .field("obtained_at", &self.obtained_at)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Tracks,
    Artists,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Tracks => "tracks",
            ItemType::Artists => "artists",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tracks" | "track" => Ok(ItemType::Tracks),
            "artists" | "artist" => Ok(ItemType::Artists),
            other => Err(format!(
                "unknown item type '{}', expected tracks or artists",
                other
            )),
        }
    }
}

/// Listening window the provider aggregates top items over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    /// Roughly the last four weeks.
    ShortTerm,
    /// Roughly the last six months.
    MediumTerm,
    /// Several years of history.
    #[default]
    LongTerm,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [
        TimeRange::ShortTerm,
        TimeRange::MediumTerm,
        TimeRange::LongTerm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "short_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::LongTerm => "long_term",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "Last 4 weeks",
            TimeRange::MediumTerm => "Last 6 months",
            TimeRange::LongTerm => "All time",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "short_term" | "short" => Ok(TimeRange::ShortTerm),
            "medium_term" | "medium" => Ok(TimeRange::MediumTerm),
            "long_term" | "long" => Ok(TimeRange::LongTerm),
            other => Err(format!(
                "unknown time range '{}', expected short_term, medium_term or long_term",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopItemsQuery {
    pub item_type: ItemType,
    pub time_range: TimeRange,
    pub limit: u32,
}

impl TopItemsQuery {
    pub fn new(item_type: ItemType, time_range: TimeRange) -> Self {
        Self {
            item_type,
            time_range,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Sets the limit, clamped to `1..=MAX_LIMIT`.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.clamp(1, MAX_LIMIT);
        self
    }
}

/// Display-ready track record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapedTrack {
    pub name: String,
    /// Every credited artist, joined with ", ".
    pub artist: String,
    pub album_name: String,
    pub album_image_url: Option<String>,
    pub track_url: String,
    pub preview_url: Option<String>,
    pub popularity: u8,
}

/// Display-ready artist record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapedArtist {
    pub name: String,
    pub image_url: Option<String>,
    pub spotify_url: String,
    pub popularity: u8,
}

/// Result of the "how niche am I" view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NicheReport {
    pub time_range: TimeRange,
    pub average_track_popularity: f64,
    pub average_artist_popularity: f64,
    pub unique_tracks: Vec<ShapedTrack>,
    pub unique_artists: Vec<ShapedArtist>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub popularity: u8,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    pub name: String,
    pub popularity: u8,
    pub url: String,
}
