use std::path::PathBuf;

use chrono::Utc;

use crate::{error::Result, spotify, types::Token};

/// Seconds before expiry at which a token is already treated as expired.
const EXPIRY_MARGIN_SECS: u64 = 240;

pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self> {
        let content = async_fs::read_to_string(Self::token_path()).await?;
        let token: Token = serde_json::from_str(&content)?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<()> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.token)?;
        async_fs::write(path, json).await?;
        Ok(())
    }

    /// Returns an access token, refreshing it first when it is about to expire.
    pub async fn get_valid_token(&mut self) -> Result<String> {
        if self.is_expired() {
            self.refresh().await?;
        }

        Ok(self.token.access_token.clone())
    }

    /// Unconditionally exchanges the refresh token and persists the result.
    pub async fn refresh(&mut self) -> Result<()> {
        let mut new_token = spotify::auth::refresh_token(&self.token.refresh_token).await?;
        // Spotify may omit the refresh token when it is not rotated.
        if new_token.refresh_token.is_empty() {
            new_token.refresh_token = self.token.refresh_token.clone();
        }
        self.token = new_token;
        self.persist().await
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + EXPIRY_MARGIN_SECS >= self.token.obtained_at + self.token.expires_in
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("sporlist/cache/token.json");
        path
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
