//! Artist and genre extraction over already fetched tracks.
//!
//! The plain variants keep every occurrence and feed the frequency views. The
//! `distinct_` variants keep the first occurrence of each identity and preserve
//! the order in which identities were first seen.

use std::collections::HashSet;

use crate::types::{Artist, Track};

/// Every artist credit of every track, in track order then credit order.
pub fn artists_of(tracks: &[Track]) -> Vec<Artist> {
    tracks
        .iter()
        .flat_map(|t| t.artists.iter().cloned())
        .collect()
}

/// Artists of `tracks` deduplicated by id, first seen wins.
pub fn distinct_artists_of(tracks: &[Track]) -> Vec<Artist> {
    let mut artists = artists_of(tracks);
    let mut seen_ids = HashSet::new();
    artists.retain(|artist| seen_ids.insert(artist.id.clone()));
    artists
}

/// Every genre of every artist, in artist order.
pub fn genres_of(artists: &[Artist]) -> Vec<String> {
    artists
        .iter()
        .flat_map(|a| a.genres.iter().cloned())
        .collect()
}

/// `genres` deduplicated by string equality, first seen wins.
pub fn distinct_genres_of(genres: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    genres
        .iter()
        .filter(|genre| seen.insert(genre.as_str()))
        .cloned()
        .collect()
}
