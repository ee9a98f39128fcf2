//! # Consolidation Module
//!
//! The track consolidation pipeline: read every source, order the merged
//! tracks by the time they were added, optionally drop duplicate songs and
//! append the result to a destination playlist.
//!
//! ```text
//! collector (pager per source) → sorter → dedup (optional) → writer
//! ```
//!
//! - [`pager`] - Turns a cursor-paginated endpoint into a lazy item stream
//! - [`collector`] - Source playlists in order, then saved tracks
//! - [`sorter`] - Stable ascending sort on `added_at`
//! - [`dedup`] - First occurrence wins on `artist_title`
//! - [`writer`] - Ordered chunked appends below the service item limit
//! - [`pipeline`] - Runs the stages in sequence
//!
//! Everything runs on a single task and every remote call is awaited before
//! the next one starts. Any failure ends the run with a
//! [`PipelineError`](crate::error::PipelineError).

pub mod collector;
pub mod dedup;
pub mod pager;
pub mod pipeline;
pub mod sorter;
pub mod writer;

pub use pipeline::{CancelFlag, Pipeline, PipelineOptions, RunSummary};
pub use writer::{BatchWriter, DEFAULT_CHUNK_SIZE, WriteSummary};
