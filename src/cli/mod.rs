//! # CLI Module
//!
//! Command implementations behind the `chronolist` binary. They read the
//! configuration, build a [`SpotifyClient`](crate::spotify::SpotifyClient)
//! and report progress with the crate's output macros.
//!
//! - [`consolidate`] - Runs the consolidation pipeline into an existing or a
//!   newly created playlist
//! - [`list_playlists`] - Lists the playlists owned by the configured user,
//!   with the ids `consolidate` expects
//!
//! ## Usage Patterns
//!
//! ```bash
//! chronolist playlists --search mix
//! chronolist consolidate --source 37i9... --source 1a2b... --destination 9z8y...
//! chronolist consolidate --source 37i9... --create "All of it" --saved --dedup
//! ```

mod consolidate;
mod playlists;

pub use consolidate::Destination;
pub use consolidate::consolidate;
pub use playlists::list_playlists;
