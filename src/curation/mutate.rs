use crate::{
    error::Result,
    spotify::SpotifyApi,
    types::{Playlist, Track},
};

/// Appends `tracks` to `playlist`.
///
/// The credential is refreshed right before the write, then every URI goes out
/// in one request. Either the whole request succeeds or the error is returned;
/// partial adds are not tracked.
pub async fn add_to_playlist<A>(api: &A, playlist: &Playlist, tracks: &[Track]) -> Result<()>
where
    A: SpotifyApi + ?Sized,
{
    let uris: Vec<String> = tracks.iter().map(|t| t.uri.clone()).collect();
    api.refresh_credential().await?;
    api.add_tracks(&playlist.id, &uris).await
}
