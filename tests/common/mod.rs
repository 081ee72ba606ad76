#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use sporlist::{
    error::{CurateError, Result},
    spotify::SpotifyApi,
    types::{Artist, Page, Playlist, Track, TracksRef},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    UserPlaylists(usize, usize),
    Playlist(String),
    PlaylistTracks(String, usize, usize),
    Artists(Vec<String>),
    Recommendations(Vec<(String, String)>),
    AddTracks(String, Vec<String>),
    RefreshCredential,
}

/// In-memory Spotify that records every call in order.
#[derive(Default)]
pub struct FakeSpotify {
    pub playlists: Vec<Playlist>,
    pub tracks: HashMap<String, Vec<Track>>,
    pub artists: HashMap<String, Artist>,
    pub recommendations: Vec<Track>,
    pub fail_tracks_at_offset: Option<usize>,
    pub fail_recommendations: bool,
    pub fail_refresh: bool,
    pub calls: Mutex<Vec<Call>>,
}

impl FakeSpotify {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_playlist(mut self, playlist: Playlist, tracks: Vec<Track>) -> Self {
        self.tracks.insert(playlist.id.clone(), tracks);
        self.playlists.push(playlist);
        self
    }

    pub fn with_artist(mut self, artist: Artist) -> Self {
        self.artists.insert(artist.id.clone(), artist);
        self
    }

    pub fn with_recommendations(mut self, tracks: Vec<Track>) -> Self {
        self.recommendations = tracks;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn service_error() -> CurateError {
        CurateError::Service {
            status: 502,
            message: "Bad gateway".to_string(),
        }
    }
}

#[async_trait]
impl SpotifyApi for FakeSpotify {
    async fn user_playlists(&self, offset: usize, limit: usize) -> Result<Page<Playlist>> {
        self.record(Call::UserPlaylists(offset, limit));
        Ok(Page {
            items: self.playlists.iter().skip(offset).take(limit).cloned().collect(),
            total: self.playlists.len() as u64,
        })
    }

    async fn playlist(&self, playlist_id: &str) -> Result<Playlist> {
        self.record(Call::Playlist(playlist_id.to_string()));
        self.playlists
            .iter()
            .find(|p| p.id == playlist_id)
            .cloned()
            .ok_or_else(|| CurateError::NotFound("Invalid playlist Id".to_string()))
    }

    async fn playlist_tracks(
        &self,
        playlist_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Track>> {
        self.record(Call::PlaylistTracks(playlist_id.to_string(), offset, limit));
        if self.fail_tracks_at_offset == Some(offset) {
            return Err(Self::service_error());
        }
        let tracks = self
            .tracks
            .get(playlist_id)
            .ok_or_else(|| CurateError::NotFound(playlist_id.to_string()))?;
        Ok(tracks.iter().skip(offset).take(limit).cloned().collect())
    }

    async fn artists(&self, ids: &[String]) -> Result<Vec<Artist>> {
        self.record(Call::Artists(ids.to_vec()));
        Ok(ids.iter().filter_map(|id| self.artists.get(id).cloned()).collect())
    }

    async fn recommendations(&self, seed_params: &[(String, String)]) -> Result<Vec<Track>> {
        self.record(Call::Recommendations(seed_params.to_vec()));
        if self.fail_recommendations {
            return Err(Self::service_error());
        }
        Ok(self.recommendations.clone())
    }

    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<()> {
        self.record(Call::AddTracks(playlist_id.to_string(), uris.to_vec()));
        Ok(())
    }

    async fn refresh_credential(&self) -> Result<()> {
        self.record(Call::RefreshCredential);
        if self.fail_refresh {
            return Err(CurateError::Auth("refresh rejected".to_string()));
        }
        Ok(())
    }
}

pub fn artist(id: &str, name: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        genres: Vec::new(),
    }
}

pub fn artist_with_genres(id: &str, name: &str, genres: &[&str]) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

pub fn track(id: &str, artists: &[Artist]) -> Track {
    Track {
        id: id.to_string(),
        name: format!("Track {}", id),
        artists: artists.to_vec(),
        uri: format!("spotify:track:{}", id),
        preview_url: None,
    }
}

pub fn numbered_tracks(count: usize) -> Vec<Track> {
    let a = artist("a1", "Artist One");
    (0..count).map(|i| track(&format!("t{}", i), &[a.clone()])).collect()
}

pub fn playlist(id: &str, total: u64) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: format!("Playlist {}", id),
        description: String::new(),
        public: false,
        tracks: TracksRef { total },
    }
}
