use tabled::Table;

use crate::{
    curation::{
        Count, artists_of, count_frequencies, fetch_genres_of_tracks, fetch_playlist_tracks,
        sort_frequencies, top_n,
    },
    error, info,
    types::FrequencyEntry,
    utils, warning,
};

use super::{playlists::select_playlist, prompt};

/// Shows how often each genre occurs across the artists of a playlist.
///
/// Every distinct artist contributes each of its genres once.
pub async fn genres(playlist_id: Option<String>, count: Option<Count>) {
    let client = super::connect().await;
    let playlist = select_playlist(&client, playlist_id).await;
    let count = resolve_count(count, "genres");

    let pb = utils::spinner(format!(
        "Fetching {} tracks of {}...",
        playlist.tracks.total, playlist.name
    ));
    let tracks = match fetch_playlist_tracks(&client, &playlist).await {
        Ok(t) => t,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch tracks: {}", e);
        }
    };

    pb.set_message("Fetching artist genres...");
    let genres = match fetch_genres_of_tracks(&client, &tracks).await {
        Ok(g) => g,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch artist genres: {}", e);
        }
    };
    pb.finish_and_clear();

    let ranked = sort_frequencies(count_frequencies(&genres));
    show_ranking("genres", &playlist.name, &ranked, count);
}

/// Shows how often each artist is credited on the tracks of a playlist.
pub async fn artists(playlist_id: Option<String>, count: Option<Count>) {
    let client = super::connect().await;
    let playlist = select_playlist(&client, playlist_id).await;
    let count = resolve_count(count, "artists");

    let pb = utils::spinner(format!(
        "Fetching {} tracks of {}...",
        playlist.tracks.total, playlist.name
    ));
    let tracks = match fetch_playlist_tracks(&client, &playlist).await {
        Ok(t) => t,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch tracks: {}", e);
        }
    };
    pb.finish_and_clear();

    let names: Vec<String> = artists_of(&tracks).into_iter().map(|a| a.name).collect();
    let ranked = sort_frequencies(count_frequencies(&names));
    show_ranking("artists", &playlist.name, &ranked, count);
}

fn resolve_count(count: Option<Count>, subject: &str) -> Count {
    match count {
        Some(c) => c,
        None => match prompt::ask_for_count(subject) {
            Ok(c) => c,
            Err(e) => error!("{}", e),
        },
    }
}

fn show_ranking(subject: &str, playlist_name: &str, ranked: &[FrequencyEntry], count: Count) {
    if ranked.is_empty() {
        warning!("No {} found in {}.", subject, playlist_name);
        return;
    }

    let shown = top_n(ranked, count);
    info!(
        "Showing {} of {} {} in {}",
        shown.len(),
        ranked.len(),
        subject,
        playlist_name
    );
    println!("{}", Table::new(utils::frequency_rows(shown)));
}
