//! # Curation Module
//!
//! The data-transformation core of sporlist. Everything here works on tracks
//! that were fetched through the [`crate::spotify::SpotifyApi`] trait and never
//! issues two Spotify calls at the same time: pages, artist detail batches and
//! playlist writes are awaited one after another.
//!
//! ```text
//! Spotify ─► pagination ─► aggregate ─┬─► frequency  (genre / artist tables)
//!                                     └─► sampler ─► recommend ─► mutate
//! ```
//!
//! - [`pagination`] - Sequential fixed-size page driver
//! - [`aggregate`] - Artist and genre extraction, first-seen-wins dedup
//! - [`frequency`] - Occurrence counting and stable descending ranking
//! - [`sampler`] - Uniform sampling without replacement
//! - [`playlist`] - Playlist, track and artist detail fetches
//! - [`recommend`] - Seed selection, novelty filter, accept/repeat cycle
//! - [`mutate`] - Appending accepted tracks to a playlist

pub mod aggregate;
pub mod frequency;
pub mod mutate;
pub mod pagination;
pub mod playlist;
pub mod recommend;
pub mod sampler;

pub use aggregate::{artists_of, distinct_artists_of, distinct_genres_of, genres_of};
pub use frequency::{Count, Frequencies, count_frequencies, sort_frequencies, top_n};
pub use mutate::add_to_playlist;
pub use pagination::{PAGE_SIZE, fetch_all};
pub use playlist::{
    fetch_artists_details, fetch_distinct_genres_of_tracks, fetch_genres_of_tracks,
    fetch_playlist, fetch_playlist_tracks, fetch_user_playlists,
};
pub use recommend::{
    CycleDecision, CycleReport, RecommendationEngine, RecommendationSeed, SEED_SIZE, SeedKind,
};
pub use sampler::{sample, sample_with};
