use crate::{
    curation::{RecommendationEngine, SeedKind, fetch_playlist_tracks},
    error, success, utils, warning,
};

use super::{
    playlists::select_playlist,
    prompt::{self, PromptDecision},
};

/// Interactive recommendation session for one playlist.
///
/// Seeds are always drawn from the tracks the playlist had when the session
/// started.
pub async fn recommend(playlist_id: Option<String>, seed: Option<SeedKind>) {
    let client = super::connect().await;
    let playlist = select_playlist(&client, playlist_id).await;
    let seed = match seed {
        Some(s) => s,
        None => match prompt::ask_for_seed() {
            Ok(s) => s,
            Err(e) => error!("{}", e),
        },
    };

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

    if tracks.is_empty() {
        warning!("{} has no tracks to base recommendations on.", playlist.name);
        return;
    }

    let mut engine = RecommendationEngine::new(&client, tracks, seed);
    match engine.run_session(&playlist, &mut PromptDecision).await {
        Ok(reports) => {
            let added: usize = reports.iter().map(|r| r.accepted).sum();
            success!(
                "Added {} tracks to {} in {} searches",
                added,
                playlist.name,
                reports.len()
            );
        }
        Err(e) => error!("Recommendation failed: {}", e),
    }
}
