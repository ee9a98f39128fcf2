use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// One song instance inside a source collection.
///
/// `id` is `None` for local files and tracks that were removed from the
/// catalog. Such entries still carry artist and title, so they take part in
/// duplicate detection, but they are never written to a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    pub added_at: String,
    pub primary_artist_name: String,
    pub title: String,
}

impl Track {
    /// Short human readable label used in error messages.
    pub fn label(&self) -> String {
        let id = self.id.as_deref().unwrap_or("<no id>");
        format!("{} - {} ({})", self.primary_artist_name, self.title, id)
    }
}

/// A single page of a cursor-paginated collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRef {
    pub id: String,
    pub name: String,
    pub owner_id: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistTrackItem>,
    pub next: Option<String>,
}

/// Entry of `/playlists/{id}/tracks` and `/me/tracks`.
///
/// Both endpoints share this shape; `track` is null for entries whose
/// recording is gone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackItem {
    pub added_at: Option<String>,
    pub track: Option<TrackObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    /// `"track"` or `"episode"`; absent on older payloads.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    #[serde(default)]
    pub name: String,
}

impl From<PlaylistTrackItem> for Track {
    fn from(item: PlaylistTrackItem) -> Self {
        let added_at = item.added_at.unwrap_or_default();
        match item.track {
            Some(track) => Track {
                // Episodes cannot be appended as `spotify:track:` URIs
                id: track
                    .id
                    .filter(|id| !id.is_empty())
                    .filter(|_| track.kind.as_deref().is_none_or(|kind| kind == "track")),
                added_at,
                primary_artist_name: track
                    .artists
                    .into_iter()
                    .next()
                    .map(|a| a.name)
                    .unwrap_or_default(),
                title: track.name,
            },
            None => Track {
                id: None,
                added_at,
                primary_artist_name: String::new(),
                title: String::new(),
            },
        }
    }
}

impl From<PlaylistTracksResponse> for Page<Track> {
    fn from(res: PlaylistTracksResponse) -> Self {
        Page {
            items: res.items.into_iter().map(Track::from).collect(),
            next: res.next,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserPlaylistsResponse {
    pub items: Vec<Playlist>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub owner: PlaylistOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub id: String,
}

impl From<GetUserPlaylistsResponse> for Page<PlaylistRef> {
    fn from(res: GetUserPlaylistsResponse) -> Self {
        Page {
            items: res
                .items
                .into_iter()
                .map(|p| PlaylistRef {
                    id: p.id,
                    name: p.name,
                    owner_id: p.owner.id,
                })
                .collect(),
            next: res.next,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
}
