//! # Spotify Integration Module
//!
//! This module is the integration layer between chronolist and the Spotify Web
//! API. It owns the HTTP communication, the mapping of API payloads into the
//! crate's [`types`](crate::types), and the mapping of HTTP failures into
//! [`ApiError`].
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer
//!     ↓
//! Consolidation Pipeline (collect → sort → dedup → write)
//!     ↓
//! TrackService trait
//!     ↓
//! SpotifyClient (reqwest, JSON)
//!     ↓
//! Spotify Web API
//! ```
//!
//! The pipeline only ever talks to the [`TrackService`] trait. It needs three
//! remote operations: reading a page of a playlist, reading a page of the
//! saved-tracks library, and appending items to a playlist.
//! [`SpotifyClient`] implements them against the real API; tests provide
//! in-memory implementations.
//!
//! ## API Coverage
//!
//! - `GET /playlists/{id}/tracks` - Playlist entries, 100 per page
//! - `GET /me/tracks` - Saved tracks, 50 per page
//! - `POST /playlists/{id}/tracks` - Append up to 100 items
//! - `GET /me/playlists` - Playlists of the current user
//! - `POST /users/{user_id}/playlists` - Create a playlist
//!
//! ## Pagination
//!
//! Spotify answers list requests with a `next` field holding the full URL of
//! the following page. That URL is used verbatim as the cursor, so a page size
//! chosen by the service is always honoured.
//!
//! ## Error Handling
//!
//! No call in this module retries. A `429 Too Many Requests` is reported as
//! [`ApiError::RateLimited`] with the `Retry-After` value so the caller can
//! decide what to do.

mod playlist;
mod tracks;

use reqwest::{Client, Response, StatusCode};

use crate::{
    error::ApiError,
    types::{ErrorResponse, Page, Track},
};

/// Largest number of items the append endpoint accepts in one call.
pub const APPEND_LIMIT: usize = 100;

/// Remote operations needed by the consolidation pipeline.
///
/// `cursor` is `None` for the first page and the previous page's `next`
/// afterwards.
#[allow(async_fn_in_trait)]
pub trait TrackService {
    async fn list_playlist_tracks(
        &self,
        playlist_id: &str,
        cursor: Option<String>,
    ) -> Result<Page<Track>, ApiError>;

    async fn list_saved_tracks(&self, cursor: Option<String>) -> Result<Page<Track>, ApiError>;

    /// Appends `track_ids` to the end of the playlist, in order.
    async fn append_playlist_tracks(
        &self,
        playlist_id: &str,
        track_ids: &[String],
    ) -> Result<(), ApiError>;
}

/// Client for the Spotify Web API authenticated with a bearer token.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token: String,
}

impl SpotifyClient {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Client configured from `SPOTIFY_API_URL` and `SPOTIFY_ACCESS_TOKEN`.
    pub fn from_env() -> Self {
        Self::new(
            crate::config::spotify_apiurl(),
            crate::config::spotify_access_token(),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{uri}{path}", uri = self.api_url, path = path)
    }
}

impl TrackService for SpotifyClient {
    async fn list_playlist_tracks(
        &self,
        playlist_id: &str,
        cursor: Option<String>,
    ) -> Result<Page<Track>, ApiError> {
        self.playlist_tracks_page(playlist_id, cursor).await
    }

    async fn list_saved_tracks(&self, cursor: Option<String>) -> Result<Page<Track>, ApiError> {
        self.saved_tracks_page(cursor).await
    }

    async fn append_playlist_tracks(
        &self,
        playlist_id: &str,
        track_ids: &[String],
    ) -> Result<(), ApiError> {
        self.add_tracks(playlist_id, track_ids).await
    }
}

/// Passes successful responses through and maps everything else to [`ApiError`].
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::NOT_FOUND | StatusCode::FORBIDDEN => Err(ApiError::Inaccessible {
            status: status.as_u16(),
        }),
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(0);
            Err(ApiError::RateLimited { retry_after })
        }
        _ => {
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error.message,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string(),
            };
            Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }
}
