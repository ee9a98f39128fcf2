use crate::{
    error::ApiError,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse, GetUserPlaylistsResponse, Page, PlaylistRef,
    },
    utils,
};

use super::{APPEND_LIMIT, SpotifyClient, check_status};

const PLAYLISTS_PAGE_LIMIT: u32 = 50;

impl SpotifyClient {
    /// Appends tracks to the end of a playlist in a single request.
    ///
    /// Track ids are sent as `spotify:track:{id}` URIs, in the order given.
    /// More than [`APPEND_LIMIT`] ids are refused locally, since the service
    /// would reject the whole call.
    pub async fn add_tracks(&self, playlist_id: &str, track_ids: &[String]) -> Result<(), ApiError> {
        if track_ids.len() > APPEND_LIMIT {
            return Err(ApiError::Rejected {
                status: 400,
                message: format!(
                    "{} items exceed the limit of {} per request",
                    track_ids.len(),
                    APPEND_LIMIT
                ),
            });
        }

        let api_url = self.url(&format!("/playlists/{id}/tracks", id = playlist_id));
        let body = AddTrackToPlaylistRequest {
            uris: track_ids.iter().map(|id| utils::track_uri(id)).collect(),
        };

        let response = self
            .http
            .post(&api_url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;
        let response = check_status(response).await?;

        response.json::<AddTrackToPlaylistResponse>().await?;
        Ok(())
    }

    /// Creates a private playlist for `user_id` and returns it.
    ///
    /// The description records when the playlist was created.
    pub async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
    ) -> Result<CreatePlaylistResponse, ApiError> {
        let api_url = self.url(&format!("/users/{user}/playlists", user = user_id));
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: utils::playlist_description(chrono::Local::now()),
            public: false,
            collaborative: false,
        };

        let response = self
            .http
            .post(&api_url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;
        let response = check_status(response).await?;

        Ok(response.json::<CreatePlaylistResponse>().await?)
    }

    /// Retrieves one page of the current user's playlists, owned or followed.
    pub async fn user_playlists_page(
        &self,
        cursor: Option<String>,
    ) -> Result<Page<PlaylistRef>, ApiError> {
        let api_url = cursor.unwrap_or_else(|| {
            self.url(&format!(
                "/me/playlists?limit={limit}",
                limit = PLAYLISTS_PAGE_LIMIT
            ))
        });

        let response = self
            .http
            .get(&api_url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        let response = check_status(response).await?;

        let json = response.json::<GetUserPlaylistsResponse>().await?;
        Ok(json.into())
    }
}
