//! Error types for remote calls and for the consolidation pipeline.
//!
//! Every [`PipelineError`] is fatal for a run. Nothing in the pipeline
//! retries; callers that want retry or backoff wrap the pipeline's
//! operations themselves.

use std::{fmt, ops::Range};

use thiserror::Error;

/// Failure of a single call against the remote service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("collection is missing or not accessible (HTTP {status})")]
    Inaccessible { status: u16 },

    #[error("rate limited, retry after {retry_after} seconds")]
    RateLimited { retry_after: u64 },

    #[error("service rejected the request (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Collection a track was being read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Playlist(String),
    SavedTracks,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Playlist(id) => write!(f, "playlist {}", id),
            Source::SavedTracks => write!(f, "saved tracks"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Collect,
    Sort,
    Dedup,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Collect => "collect",
            Stage::Sort => "sort",
            Stage::Dedup => "dedup",
            Stage::Write => "write",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to fetch a page of {origin}: {error}")]
    TransientFetch {
        origin: Source,
        #[source]
        error: ApiError,
    },

    #[error("source playlist {playlist_id} cannot be read: {error}")]
    InvalidSource {
        playlist_id: String,
        #[source]
        error: ApiError,
    },

    #[error("track at position {position} ({track}) has malformed added_at {value:?}")]
    MalformedTimestamp {
        position: usize,
        track: String,
        value: String,
    },

    /// `failed_chunk` is 1-based; `range` indexes the extracted id sequence.
    #[error(
        "chunk {failed_chunk} (tracks {}..{}) failed after {chunks_written} chunk(s) were written: {error}",
        .range.start,
        .range.end
    )]
    Write {
        failed_chunk: usize,
        chunks_written: usize,
        range: Range<usize>,
        #[source]
        error: ApiError,
    },

    #[error("cancelled before the {stage} stage")]
    Cancelled { stage: Stage },
}

impl PipelineError {
    /// Builds the collection error for a failed read of `origin`.
    ///
    /// An inaccessible playlist is reported as an invalid source, everything
    /// else as a fetch failure.
    pub fn from_fetch(origin: Source, error: ApiError) -> Self {
        match (origin, error) {
            (Source::Playlist(playlist_id), error @ ApiError::Inaccessible { .. }) => {
                PipelineError::InvalidSource { playlist_id, error }
            }
            (origin, error) => PipelineError::TransientFetch { origin, error },
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::TransientFetch { .. } | PipelineError::InvalidSource { .. } => {
                Stage::Collect
            }
            PipelineError::MalformedTimestamp { .. } => Stage::Sort,
            PipelineError::Write { .. } => Stage::Write,
            PipelineError::Cancelled { stage } => *stage,
        }
    }
}
