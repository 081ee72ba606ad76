//! Fetch helpers that combine the paginated fetcher with Spotify calls.

use crate::{
    curation::{
        aggregate::{distinct_artists_of, distinct_genres_of, genres_of},
        pagination::{PAGE_SIZE, fetch_all},
    },
    error::{CurateError, Result},
    spotify::SpotifyApi,
    types::{Artist, Playlist, Track},
};

/// Resolves a playlist id typed in by the user.
///
/// Returns `CurateError::NotFound` untouched so the caller can ask again; any
/// other failure is fatal for the command.
pub async fn fetch_playlist<A>(api: &A, playlist_id: &str) -> Result<Playlist>
where
    A: SpotifyApi + ?Sized,
{
    api.playlist(playlist_id.trim()).await
}

/// All playlists of the current user.
pub async fn fetch_user_playlists<A>(api: &A) -> Result<Vec<Playlist>>
where
    A: SpotifyApi + ?Sized,
{
    let first = api.user_playlists(0, PAGE_SIZE).await?;
    let total = first.total as usize;
    let fetched = first.items.len();

    let mut playlists = first.items;
    if total > fetched {
        let rest = fetch_all(total - fetched, move |offset, limit| async move {
            Ok::<_, CurateError>(api.user_playlists(fetched + offset, limit).await?.items)
        })
        .await?;
        playlists.extend(rest);
    }
    Ok(playlists)
}

/// Every track of `playlist`, in playlist order.
pub async fn fetch_playlist_tracks<A>(api: &A, playlist: &Playlist) -> Result<Vec<Track>>
where
    A: SpotifyApi + ?Sized,
{
    let id = playlist.id.as_str();
    fetch_all(playlist.tracks.total as usize, move |offset, limit| {
        api.playlist_tracks(id, offset, limit)
    })
    .await
}

/// Detailed artists, genres included, looked up in batches of 50 ids.
pub async fn fetch_artists_details<A>(api: &A, artists: &[Artist]) -> Result<Vec<Artist>>
where
    A: SpotifyApi + ?Sized,
{
    fetch_all(artists.len(), move |offset, limit| {
        let ids: Vec<String> = artists
            .iter()
            .skip(offset)
            .take(limit)
            .map(|a| a.id.clone())
            .collect();
        async move { api.artists(&ids).await }
    })
    .await
}

/// Genres of all distinct artists of `tracks`, one entry per artist credit.
///
/// This is the occurrence list behind the genre frequency view.
pub async fn fetch_genres_of_tracks<A>(api: &A, tracks: &[Track]) -> Result<Vec<String>>
where
    A: SpotifyApi + ?Sized,
{
    let artists = distinct_artists_of(tracks);
    let detailed = fetch_artists_details(api, &artists).await?;
    Ok(genres_of(&detailed))
}

/// Distinct genres across the artists of `tracks`, first seen wins.
pub async fn fetch_distinct_genres_of_tracks<A>(api: &A, tracks: &[Track]) -> Result<Vec<String>>
where
    A: SpotifyApi + ?Sized,
{
    let genres = fetch_genres_of_tracks(api, tracks).await?;
    Ok(distinct_genres_of(&genres))
}
