use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::{
    error::{PipelineError, Stage},
    info,
    spotify::TrackService,
    success,
};

use super::{
    collector, dedup, sorter,
    writer::{BatchWriter, DEFAULT_CHUNK_SIZE},
};

/// Set to `true` to stop a run at the next stage boundary.
pub type CancelFlag = Arc<AtomicBool>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    pub include_saved_tracks: bool,
    pub deduplicate: bool,
    pub chunk_size: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            include_saved_tracks: false,
            deduplicate: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub collected: usize,
    pub duplicates_removed: usize,
    pub tracks_written: usize,
    pub chunks_written: usize,
}

/// Runs collect → sort → dedup → write against one service.
///
/// Each stage takes the previous stage's sequence and returns a new one.
/// Sorting always precedes deduplication so that the earliest added copy of
/// a song survives.
pub struct Pipeline<'a, S> {
    service: &'a S,
    options: PipelineOptions,
    cancel: Option<CancelFlag>,
}

impl<'a, S: TrackService> Pipeline<'a, S> {
    pub fn new(service: &'a S, options: PipelineOptions) -> Self {
        Self {
            service,
            options,
            cancel: None,
        }
    }

    /// Checks `flag` before every stage. A write that has started always
    /// runs to completion or failure.
    pub fn with_cancel(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub async fn run(
        &self,
        source_playlist_ids: &[String],
        destination: &str,
    ) -> Result<RunSummary, PipelineError> {
        self.checkpoint(Stage::Collect)?;
        let tracks = collector::collect(
            self.service,
            source_playlist_ids,
            self.options.include_saved_tracks,
        )
        .await?;
        let collected = tracks.len();
        success!(
            "Collected {} tracks from {} source(s)",
            collected,
            source_playlist_ids.len() + usize::from(self.options.include_saved_tracks)
        );

        self.checkpoint(Stage::Sort)?;
        let mut tracks = sorter::sort(tracks)?;

        if self.options.deduplicate {
            self.checkpoint(Stage::Dedup)?;
            tracks = dedup::dedup(tracks);
            info!("Removed {} duplicate tracks", collected - tracks.len());
        }
        let duplicates_removed = collected - tracks.len();

        self.checkpoint(Stage::Write)?;
        let writer = BatchWriter::new(self.options.chunk_size);
        info!(
            "Writing {} tracks to playlist {} in chunks of {}",
            tracks.len(),
            destination,
            writer.chunk_size()
        );
        let written = writer.write(self.service, destination, &tracks).await?;

        Ok(RunSummary {
            collected,
            duplicates_removed,
            tracks_written: written.tracks_written,
            chunks_written: written.chunks_written,
        })
    }

    fn checkpoint(&self, stage: Stage) -> Result<(), PipelineError> {
        match &self.cancel {
            Some(flag) if flag.load(Ordering::SeqCst) => Err(PipelineError::Cancelled { stage }),
            _ => Ok(()),
        }
    }
}
