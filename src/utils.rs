use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::types::{PlaylistRef, PlaylistTableRow};

/// Format of `added_at` values: ISO 8601, UTC, second precision.
pub const ADDED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub fn track_uri(track_id: &str) -> String {
    format!("spotify:track:{}", track_id)
}

/// Parses an `added_at` value strictly; anything but `YYYY-MM-DDTHH:MM:SSZ` fails.
pub fn parse_added_at(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, ADDED_AT_FORMAT)
        .ok()
        .map(|dt| dt.and_utc())
}

pub fn playlist_description<Tz>(created: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "Chronological list of sorted playlists created on {}",
        created.format("%d/%m/%Y at %H:%M:%S")
    )
}

/// Keeps the playlists owned by `user_id`, optionally filtered by a
/// case-insensitive name search, in their original order.
pub fn owned_playlists(
    playlists: Vec<PlaylistRef>,
    user_id: &str,
    search: Option<&str>,
) -> Vec<PlaylistRef> {
    let search_term = search.map(|s| s.to_lowercase());

    playlists
        .into_iter()
        .filter(|p| p.owner_id == user_id)
        .filter(|p| match &search_term {
            Some(term) => p.name.to_lowercase().contains(term),
            None => true,
        })
        .collect()
}

pub fn playlist_table_rows(playlists: &[PlaylistRef]) -> Vec<PlaylistTableRow> {
    playlists
        .iter()
        .map(|p| PlaylistTableRow {
            name: p.name.clone(),
            id: p.id.clone(),
        })
        .collect()
}
