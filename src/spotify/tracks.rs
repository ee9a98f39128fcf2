use crate::{
    error::ApiError,
    types::{Page, PlaylistTracksResponse, Track},
};

use super::{SpotifyClient, check_status};

const PLAYLIST_PAGE_LIMIT: u32 = 100;
const SAVED_PAGE_LIMIT: u32 = 50;

impl SpotifyClient {
    /// Retrieves one page of entries of a playlist.
    ///
    /// Without a cursor the first page is requested; with a cursor the `next`
    /// URL returned by the previous page is followed as is.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Inaccessible`] when the playlist does not exist or the
    ///   user cannot read it
    /// - [`ApiError::RateLimited`] on `429 Too Many Requests`
    /// - [`ApiError::Request`] on network or decoding failures
    pub async fn playlist_tracks_page(
        &self,
        playlist_id: &str,
        cursor: Option<String>,
    ) -> Result<Page<Track>, ApiError> {
        let api_url = cursor.unwrap_or_else(|| {
            self.url(&format!(
                "/playlists/{id}/tracks?limit={limit}&fields=items(added_at,track(id,name,type,artists(name))),next",
                id = playlist_id,
                limit = PLAYLIST_PAGE_LIMIT
            ))
        });

        self.get_tracks_page(&api_url).await
    }

    /// Retrieves one page of the current user's saved tracks.
    pub async fn saved_tracks_page(&self, cursor: Option<String>) -> Result<Page<Track>, ApiError> {
        let api_url = cursor.unwrap_or_else(|| {
            self.url(&format!("/me/tracks?limit={limit}", limit = SAVED_PAGE_LIMIT))
        });

        self.get_tracks_page(&api_url).await
    }

    async fn get_tracks_page(&self, api_url: &str) -> Result<Page<Track>, ApiError> {
        let response = self
            .http
            .get(api_url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        let response = check_status(response).await?;

        let json = response.json::<PlaylistTracksResponse>().await?;
        Ok(json.into())
    }
}
