use futures::TryStreamExt;

use crate::{
    error::{PipelineError, Source},
    info,
    spotify::TrackService,
    types::Track,
};

use super::pager;

/// Gathers every entry of the source playlists, then optionally the saved
/// tracks, into one sequence.
///
/// Playlists are read one after another in the given order and each keeps
/// the order the service returns. Saved tracks come last. Entries without a
/// recording id are kept; they are filtered out only when ids are extracted
/// for writing.
///
/// # Errors
///
/// The first failed page aborts the whole collection. A playlist the service
/// reports as missing or not accessible yields
/// [`PipelineError::InvalidSource`]; any other failure yields
/// [`PipelineError::TransientFetch`].
pub async fn collect<S: TrackService>(
    service: &S,
    source_playlist_ids: &[String],
    include_saved_tracks: bool,
) -> Result<Vec<Track>, PipelineError> {
    let mut tracks: Vec<Track> = Vec::new();

    for playlist_id in source_playlist_ids {
        let entries: Vec<Track> =
            pager::paginate(move |cursor| service.list_playlist_tracks(playlist_id, cursor))
                .try_collect()
                .await
                .map_err(|e| PipelineError::from_fetch(Source::Playlist(playlist_id.clone()), e))?;

        info!(
            "Collected {} tracks from playlist {}",
            entries.len(),
            playlist_id
        );
        tracks.extend(entries);
    }

    if include_saved_tracks {
        let saved: Vec<Track> = pager::paginate(move |cursor| service.list_saved_tracks(cursor))
            .try_collect()
            .await
            .map_err(|e| PipelineError::from_fetch(Source::SavedTracks, e))?;

        info!("Collected {} saved tracks", saved.len());
        tracks.extend(saved);
    }

    Ok(tracks)
}
