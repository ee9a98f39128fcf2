use std::collections::HashSet;

use crate::types::Track;

/// Identity used for duplicate detection: `artist + "_" + title`, exact and
/// case-sensitive.
///
/// Different recordings with the same reported artist and title (a studio
/// and a live version, say) share a key. Tracks with neither artist nor title
/// all map to `"_"`.
pub fn dedup_key(track: &Track) -> String {
    format!("{}_{}", track.primary_artist_name, track.title)
}

/// Entries with no id, artist or title (recordings gone from the catalog)
/// have nothing to match on and never take part in duplicate detection.
fn is_placeholder(track: &Track) -> bool {
    track.id.is_none() && track.primary_artist_name.is_empty() && track.title.is_empty()
}

/// Keeps the first track of every key and drops the rest, whatever their id.
///
/// Run it on sorted input so the earliest added copy is the one kept.
pub fn dedup(mut tracks: Vec<Track>) -> Vec<Track> {
    let mut seen_keys = HashSet::new();
    tracks.retain(|track| is_placeholder(track) || seen_keys.insert(dedup_key(track)));
    tracks
}
