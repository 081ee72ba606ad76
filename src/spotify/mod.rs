//! # Spotify Integration Module
//!
//! This module is the integration layer between sporlist and the Spotify Web
//! API. The curation pipeline never talks HTTP itself; it works against the
//! [`SpotifyApi`] trait, which [`SpotifyClient`] implements with `reqwest`.
//!
//! ```text
//! CLI Layer (prompts, tables)
//!          ↓
//! Curation Layer (pagination, aggregation, ranking, recommendations)
//!          ↓
//! SpotifyApi trait
//!     ├── SpotifyClient (reqwest + TokenManager)
//!     └── in-memory fakes in tests
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Submodules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow, code exchange and token refresh
//! - [`client`] - HTTP implementation of [`SpotifyApi`]
//!
//! ## Error Handling
//!
//! Every operation returns [`crate::error::CurateError`]. A 404 maps to
//! `NotFound`, any other non-success status to `Service`, network and decoding
//! failures to `Transport`. Nothing is retried here; failures abort the
//! operation that issued the call.
//!
//! ## Credentials
//!
//! The client owns the credential. It refreshes an access token that is about
//! to expire before each request, and [`SpotifyApi::refresh_credential`]
//! forces a refresh, which the playlist mutator does right before writing.
//!
//! ## API Coverage
//!
//! - `GET /me/playlists` - User's playlists
//! - `GET /playlists/{id}` - Playlist metadata with track total
//! - `GET /playlists/{id}/tracks` - Paginated playlist items
//! - `GET /artists` - Batch artist details (up to 50 ids)
//! - `GET /recommendations` - Recommended tracks for a seed
//! - `POST /playlists/{id}/tracks` - Append tracks
//! - `POST /api/token` - Token exchange and refresh

pub mod auth;
pub mod client;

use async_trait::async_trait;

pub use client::SpotifyClient;

use crate::{
    error::Result,
    types::{Artist, Page, Playlist, Track},
};

/// Operations the curation pipeline needs from Spotify.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    /// Playlists owned or followed by the current user.
    async fn user_playlists(&self, offset: usize, limit: usize) -> Result<Page<Playlist>>;

    /// A single playlist; `NotFound` when the id does not resolve.
    async fn playlist(&self, playlist_id: &str) -> Result<Playlist>;

    /// One window of a playlist's tracks. Local files and removed tracks are skipped.
    async fn playlist_tracks(
        &self,
        playlist_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Track>>;

    /// Artist details, genres included, for at most 50 ids.
    async fn artists(&self, ids: &[String]) -> Result<Vec<Artist>>;

    /// Recommended tracks for the given seed query parameters.
    async fn recommendations(&self, seed_params: &[(String, String)]) -> Result<Vec<Track>>;

    /// Appends `uris` to the playlist in a single request.
    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<()>;

    /// Exchanges the refresh token for a fresh access token.
    async fn refresh_credential(&self) -> Result<()>;
}
