//! Configuration management for chronolist.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::consolidate::DEFAULT_CHUNK_SIZE;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the `chronolist` data directory if needed and reads
/// `chronolist/.env` from it. A missing `.env` file is not an error; the
/// process environment alone may carry the configuration.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/chronolist/.env`
/// - macOS: `~/Library/Application Support/chronolist/.env`
/// - Windows: `%LOCALAPPDATA%/chronolist/.env`
///
/// # Errors
///
/// Returns an error if the directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    match dotenv::from_path(&path) {
        Ok(()) => Ok(()),
        Err(dotenv::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(format!("{}: {}", path.display(), e)),
    }
}

pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("chronolist/.env");
    path
}

/// Returns the Spotify Web API base URL.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the bearer token used for every API request.
///
/// The token must carry the `playlist-read-private`,
/// `playlist-read-collaborative`, `playlist-modify-private` and
/// `user-library-read` scopes. Obtaining it is up to the user.
///
/// # Panics
///
/// Panics if the `SPOTIFY_ACCESS_TOKEN` environment variable is not set.
pub fn spotify_access_token() -> String {
    env::var("SPOTIFY_ACCESS_TOKEN").expect("SPOTIFY_ACCESS_TOKEN must be set")
}

/// Returns the Spotify user ID, used to tell owned playlists apart and to
/// create new ones.
///
/// # Panics
///
/// Panics if the `SPOTIFY_USER_ID` environment variable is not set.
pub fn spotify_user() -> String {
    env::var("SPOTIFY_USER_ID").expect("SPOTIFY_USER_ID must be set")
}

/// Returns the number of tracks per append request.
///
/// Reads `CHRONOLIST_CHUNK_SIZE`; falls back to [`DEFAULT_CHUNK_SIZE`] when
/// it is unset or not a positive number.
pub fn chunk_size() -> usize {
    parse_chunk_size(env::var("CHRONOLIST_CHUNK_SIZE").ok().as_deref())
}

pub fn parse_chunk_size(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|size| *size > 0)
        .unwrap_or(DEFAULT_CHUNK_SIZE)
}
