use std::time::Duration;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::{
    curation::Count,
    types::{FrequencyEntry, FrequencyTableRow, Playlist, PlaylistTableRow, Track, TrackTableRow},
};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// A steadily ticking spinner showing `message`.
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// One line summary used in playlist pickers:
/// `name | description | Public | 12 tracks`, description omitted when empty.
pub fn format_playlist(playlist: &Playlist) -> String {
    let mut line = playlist.name.clone();
    if !playlist.description.is_empty() {
        line.push_str(&format!(" | {}", playlist.description));
    }
    line.push_str(if playlist.public {
        " | Public"
    } else {
        " | Private"
    });
    line.push_str(&format!(" | {} tracks", playlist.tracks.total));
    line
}

/// `name | artist, artist | Link: preview`.
pub fn format_track(track: &Track) -> String {
    format!(
        "{} | {} | Link: {}",
        track.name,
        artist_names(track),
        track.preview_url.as_deref().unwrap_or("-")
    )
}

pub fn artist_names(track: &Track) -> String {
    track
        .artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn playlist_rows(playlists: &[Playlist]) -> Vec<PlaylistTableRow> {
    playlists
        .iter()
        .map(|p| PlaylistTableRow {
            name: p.name.clone(),
            description: p.description.clone(),
            visibility: if p.public { "Public" } else { "Private" }.to_string(),
            tracks: p.tracks.total,
            id: p.id.clone(),
        })
        .collect()
}

pub fn track_rows(tracks: &[Track]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .map(|t| TrackTableRow {
            name: t.name.clone(),
            artists: artist_names(t),
            preview: t.preview_url.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

pub fn frequency_rows(entries: &[FrequencyEntry]) -> Vec<FrequencyTableRow> {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| FrequencyTableRow {
            rank: i + 1,
            name: e.key.clone(),
            times: e.count,
        })
        .collect()
}

/// Parses a count typed by the user: a positive number or `all`.
pub fn parse_count(input: &str) -> Result<Count, String> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("all") {
        return Ok(Count::All);
    }

    match input.parse::<usize>() {
        Ok(0) => Err("Count must be greater than zero".to_string()),
        Ok(n) => Ok(Count::Top(n)),
        Err(_) => Err(format!("Invalid count '{}'. Use a number or 'all'", input)),
    }
}
