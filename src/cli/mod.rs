//! # CLI Module
//!
//! The interactive shell of sporlist. Each command resolves the playlist it
//! works on, asks for whatever was not passed as a flag and hands the actual
//! work to [`crate::curation`].
//!
//! ## Commands
//!
//! - [`auth`] - Spotify OAuth authentication with PKCE
//! - [`list_playlists`] - Table of the user's playlists
//! - [`genres`] - Most common genres of a playlist's artists
//! - [`artists`] - Most common artists of a playlist
//! - [`recommend`] - Recommendation session that appends accepted tracks
//!
//! ## Playlist Selection
//!
//! Without `--playlist` the user picks from their own playlists or chooses
//! `OTHER PLAYLIST` and types an id. An id that does not resolve is reported
//! and the picker is shown again; every other failure ends the command.
//!
//! ## Usage Patterns
//!
//! ```bash
//! sporlist auth                              # Authenticate with Spotify
//! sporlist playlists                         # List playlists with ids
//! sporlist genres --top 20                   # Pick a playlist, show top 20 genres
//! sporlist artists --playlist <ID> --all     # Every artist of a playlist
//! sporlist recommend --seed tracks           # Recommendations seeded by tracks
//! ```
//!
//! ## Output
//!
//! Progress is shown with spinners, results as tables, and status lines use
//! the `info!`, `success!`, `warning!` and `error!` macros. `error!` exits the
//! process, so it only appears here and never in library code.

mod auth;
mod playlists;
mod prompt;
mod recommend;
mod views;

pub use auth::auth;
pub use playlists::list_playlists;
pub use recommend::recommend;
pub use views::artists;
pub use views::genres;

use crate::{error, spotify::SpotifyClient};

async fn connect() -> SpotifyClient {
    match SpotifyClient::from_cache().await {
        Ok(client) => client,
        Err(e) => error!("{}", e),
    }
}
