//! chronolist library
//!
//! Merges tracks from several Spotify playlists, and optionally the saved
//! tracks library, into one destination playlist ordered by the time each
//! track was added.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `consolidate` - The collect, sort, dedup and write pipeline
//! - `error` - Error types for remote calls and pipeline stages
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use chronolist::{consolidate::{Pipeline, PipelineOptions}, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> chronolist::Res<()> {
//!     chronolist::config::load_env().await?;
//!     let client = SpotifyClient::from_env();
//!     let sources = vec!["37i9dQZF1DX0XUsuxWHRQd".to_string()];
//!     Pipeline::new(&client, PipelineOptions::default())
//!         .run(&sources, "1a2b3c4d5e6f7g8h9i0j")
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod consolidate;
pub mod error;
pub mod spotify;
pub mod types;
pub mod utils;

/// Result alias used by the CLI layer.
///
/// The pipeline itself returns [`error::PipelineError`]; commands box it
/// together with configuration and I/O failures.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[doc(hidden)]
pub use colored;

/// Prints a status line with a blue `o` marker.
///
/// ```
/// info!("Collected {} tracks from playlist {}", count, playlist_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use $crate::colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a status line with a green `✓` marker.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use $crate::colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line and exits with status 1.
///
/// Only for the binary and the CLI layer; library code returns errors.
///
/// ```
/// error!("{} stage failed: {}", stage, err);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use $crate::colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a status line with a yellow `!` marker for recoverable issues.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use $crate::colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
