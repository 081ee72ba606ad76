//! Configuration management for the playlist curation CLI.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Spotify API credentials and the callback server address.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//!
//! Getters return [`CurateError::Config`] naming the missing variable instead of
//! panicking, so commands can report a readable message.

use std::{env, path::PathBuf};

use crate::error::{CurateError, Result};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from `sporlist/.env` under the platform-specific
/// local data directory:
/// - Linux: `~/.local/share/sporlist/.env`
/// - macOS: `~/Library/Application Support/sporlist/.env`
/// - Windows: `%LOCALAPPDATA%/sporlist/.env`
///
/// A missing file is not an error when the variables are already present in
/// the process environment; the getters below report whatever is still unset.
pub async fn load_env() -> Result<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    match dotenv::from_path(&path) {
        Ok(()) => Ok(()),
        Err(dotenv::Error::Io(_)) => Ok(()),
        Err(e) => Err(CurateError::Config(format!(
            "Cannot parse {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Location of the `.env` file read by [`load_env`].
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sporlist/.env");
    path
}

fn required(name: &str) -> Result<String> {
    env::var(name).map_err(|_| CurateError::Config(format!("{} must be set", name)))
}

/// Address the local OAuth callback server binds to, e.g. `127.0.0.1:8080`.
pub fn server_addr() -> Result<String> {
    required("SERVER_ADDRESS")
}

/// Client id of the application registered on Spotify's developer platform.
pub fn spotify_client_id() -> Result<String> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Callback URL Spotify redirects to after authorization.
///
/// Must match the redirect URI registered in the Spotify application settings.
pub fn spotify_redirect_uri() -> Result<String> {
    required("SPOTIFY_API_REDIRECT_URI")
}

/// Space separated scopes requested during authorization.
///
/// Reading and modifying playlists needs at least `playlist-read-private`,
/// `playlist-read-collaborative`, `playlist-modify-private` and
/// `playlist-modify-public`.
pub fn spotify_scope() -> Result<String> {
    required("SPOTIFY_API_AUTH_SCOPE")
}

/// Authorization endpoint, e.g. `https://accounts.spotify.com/authorize`.
pub fn spotify_apiauth_url() -> Result<String> {
    required("SPOTIFY_API_AUTH_URL")
}

/// Web API base URL, e.g. `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> Result<String> {
    required("SPOTIFY_API_URL")
}

/// Token endpoint, e.g. `https://accounts.spotify.com/api/token`.
pub fn spotify_apitoken_url() -> Result<String> {
    required("SPOTIFY_API_TOKEN_URL")
}
