use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    config,
    error::{CurateError, Result},
    management::TokenManager,
    spotify::SpotifyApi,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, Artist, Page, Playlist,
        PlaylistTracksResponse, RecommendationsResponse, SeveralArtistsResponse, Track,
    },
};

/// Spotify Web API client carrying its own credential.
///
/// The credential sits behind an async mutex so the client can be shared by
/// reference while still refreshing the token in place.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token_mgr: Mutex<TokenManager>,
}

impl SpotifyClient {
    pub fn new(token_mgr: TokenManager, api_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into(),
            token_mgr: Mutex::new(token_mgr),
        }
    }

    /// Builds a client from the cached token and the configured API URL.
    pub async fn from_cache() -> Result<Self> {
        let token_mgr = TokenManager::load().await.map_err(|e| {
            CurateError::Auth(format!(
                "Failed to load token. Please run sporlist auth\n Error: {}",
                e
            ))
        })?;
        Ok(Self::new(token_mgr, config::spotify_apiurl()?))
    }

    async fn token(&self) -> Result<String> {
        self.token_mgr.lock().await.get_valid_token().await
    }

    async fn get_json<R>(&self, path: &str, query: &[(&str, String)]) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let token = self.token().await?;
        let response = self
            .http
            .get(format!("{}{}", self.api_url, path))
            .query(query)
            .bearer_auth(token)
            .send()
            .await?;

        Ok(check_status(response).await?.json::<R>().await?)
    }

    async fn post_json<R, P>(&self, path: &str, payload: &P) -> Result<R>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized + Sync,
    {
        let token = self.token().await?;
        let response = self
            .http
            .post(format!("{}{}", self.api_url, path))
            .json(payload)
            .bearer_auth(token)
            .send()
            .await?;

        Ok(check_status(response).await?.json::<R>().await?)
    }
}

/// Maps non-success statuses onto the error taxonomy.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let message = match response.json::<Value>().await {
        Ok(body) => body["error"]["message"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        Err(_) => String::new(),
    };

    if status == StatusCode::NOT_FOUND {
        return Err(CurateError::NotFound(if message.is_empty() {
            url
        } else {
            message
        }));
    }

    Err(CurateError::Service {
        status: status.as_u16(),
        message: if message.is_empty() {
            status.canonical_reason().unwrap_or("unknown").to_string()
        } else {
            message
        },
    })
}

#[async_trait]
impl SpotifyApi for SpotifyClient {
    async fn user_playlists(&self, offset: usize, limit: usize) -> Result<Page<Playlist>> {
        self.get_json(
            "/me/playlists",
            &[("offset", offset.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    async fn playlist(&self, playlist_id: &str) -> Result<Playlist> {
        self.get_json(
            &format!("/playlists/{}", playlist_id),
            &[(
                "fields",
                "id,name,description,public,tracks.total".to_string(),
            )],
        )
        .await
    }

    async fn playlist_tracks(
        &self,
        playlist_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Track>> {
        let page: PlaylistTracksResponse = self
            .get_json(
                &format!("/playlists/{}/tracks", playlist_id),
                &[("offset", offset.to_string()), ("limit", limit.to_string())],
            )
            .await?;

        Ok(page
            .items
            .into_iter()
            .filter(|item| !item.is_local)
            .filter_map(|item| item.track)
            .filter(|track| !track.id.is_empty())
            .collect())
    }

    async fn artists(&self, ids: &[String]) -> Result<Vec<Artist>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let res: SeveralArtistsResponse =
            self.get_json("/artists", &[("ids", ids.join(","))]).await?;
        Ok(res.artists.into_iter().flatten().collect())
    }

    async fn recommendations(&self, seed_params: &[(String, String)]) -> Result<Vec<Track>> {
        let query: Vec<(&str, String)> = seed_params
            .iter()
            .map(|(k, v)| (k.as_str(), v.clone()))
            .collect();

        let res: RecommendationsResponse = self.get_json("/recommendations", &query).await?;
        Ok(res.tracks)
    }

    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<()> {
        let payload = AddTrackToPlaylistRequest {
            uris: uris.to_vec(),
        };
        let _: AddTrackToPlaylistResponse = self
            .post_json(&format!("/playlists/{}/tracks", playlist_id), &payload)
            .await?;
        Ok(())
    }

    async fn refresh_credential(&self) -> Result<()> {
        self.token_mgr.lock().await.refresh().await
    }
}
