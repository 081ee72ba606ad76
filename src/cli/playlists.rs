use dialoguer::{Input, Select};
use tabled::Table;

use crate::{
    curation::{fetch_playlist, fetch_user_playlists},
    error,
    spotify::SpotifyApi,
    types::Playlist,
    utils, warning,
};

const OTHER_PLAYLIST: &str = "* OTHER PLAYLIST";

pub async fn list_playlists() {
    let client = super::connect().await;

    let pb = utils::spinner("Fetching playlists...");
    let playlists = match fetch_user_playlists(&client).await {
        Ok(p) => p,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch playlists: {}", e);
        }
    };
    pb.finish_and_clear();

    if playlists.is_empty() {
        warning!("No playlists found.");
        return;
    }

    println!("{}", Table::new(utils::playlist_rows(&playlists)));
}

/// Resolves the playlist a command works on.
///
/// An id given on the command line is looked up directly. Otherwise the user
/// picks one of their playlists or types an id; ids that do not resolve lead
/// back to the picker.
pub async fn select_playlist<A>(api: &A, playlist_id: Option<String>) -> Playlist
where
    A: SpotifyApi + ?Sized,
{
    if let Some(id) = playlist_id {
        match fetch_playlist(api, &id).await {
            Ok(p) => return p,
            Err(e) if e.is_not_found() => warning!("Playlist {} not found: {}", id, e),
            Err(e) => error!("Failed to fetch playlist {}: {}", id, e),
        }
    }

    let pb = utils::spinner("Fetching playlists...");
    let playlists = match fetch_user_playlists(api).await {
        Ok(p) => p,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch playlists: {}", e);
        }
    };
    pb.finish_and_clear();

    let mut choices: Vec<String> = playlists
        .iter()
        .map(|p| format!("* {}", utils::format_playlist(p)))
        .collect();
    choices.push(OTHER_PLAYLIST.to_string());

    loop {
        let selection = match Select::new()
            .with_prompt("Select a playlist")
            .items(&choices)
            .default(0)
            .interact()
        {
            Ok(s) => s,
            Err(e) => error!("Cannot read selection: {}", e),
        };

        if let Some(playlist) = playlists.get(selection) {
            return playlist.clone();
        }

        let id: String = match Input::new()
            .with_prompt("Type in the playlist ID")
            .interact_text()
        {
            Ok(id) => id,
            Err(e) => error!("Cannot read playlist ID: {}", e),
        };

        match fetch_playlist(api, &id).await {
            Ok(p) => return p,
            Err(e) if e.is_not_found() => {
                warning!("Playlist not found");
                warning!("{}", e);
            }
            Err(e) => error!("Failed to fetch playlist {}: {}", id, e),
        }
    }
}
