use crate::{
    error::PipelineError,
    spotify::{APPEND_LIMIT, TrackService},
    types::Track,
};

/// Items per append call. Leaves headroom below [`APPEND_LIMIT`].
pub const DEFAULT_CHUNK_SIZE: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    pub tracks_written: usize,
    pub chunks_written: usize,
}

/// Appends an ordered track sequence to a playlist in bounded chunks.
#[derive(Debug, Clone, Copy)]
pub struct BatchWriter {
    chunk_size: usize,
}

impl Default for BatchWriter {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}

impl BatchWriter {
    /// `chunk_size` is clamped into `1..=APPEND_LIMIT`.
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.clamp(1, APPEND_LIMIT),
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Ids of `tracks` in order, without the tracks that have none.
    pub fn track_ids(tracks: &[Track]) -> Vec<String> {
        tracks.iter().filter_map(|t| t.id.clone()).collect()
    }

    /// Writes the ids of `tracks` to the end of `destination`.
    ///
    /// Chunks are sent one at a time, in order, since every call appends to
    /// the end of the playlist. The first failed chunk stops the write; the
    /// error carries its 1-based number, how many chunks are already in the
    /// destination and the id range it covered. Nothing is retried or rolled
    /// back.
    pub async fn write<S: TrackService>(
        &self,
        service: &S,
        destination: &str,
        tracks: &[Track],
    ) -> Result<WriteSummary, PipelineError> {
        let track_ids = Self::track_ids(tracks);
        let mut summary = WriteSummary {
            tracks_written: 0,
            chunks_written: 0,
        };

        for (index, chunk) in track_ids.chunks(self.chunk_size).enumerate() {
            let start = index * self.chunk_size;

            service
                .append_playlist_tracks(destination, chunk)
                .await
                .map_err(|error| PipelineError::Write {
                    failed_chunk: index + 1,
                    chunks_written: summary.chunks_written,
                    range: start..start + chunk.len(),
                    error,
                })?;

            summary.tracks_written += chunk.len();
            summary.chunks_written += 1;
        }

        Ok(summary)
    }
}
