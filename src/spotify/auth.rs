use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    config,
    error::{CurateError, Result},
    management::TokenManager,
    server::start_api_server,
    types::{PkceToken, Token},
    utils, warning,
};

/// Runs the OAuth 2.0 PKCE authorization flow and caches the resulting token.
///
/// 1. Generates a code verifier and its SHA256 challenge
/// 2. Starts the local callback server
/// 3. Opens the authorization URL in the default browser
/// 4. Waits up to 60 seconds for the callback to store a token
/// 5. Persists the token through [`TokenManager`]
///
/// When the browser cannot be opened the URL is printed so the user can
/// navigate to it manually.
pub async fn auth(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Result<Token> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&code_challenge={code_challenge}&code_challenge_method=S256&scope={scope}",
        spotify_auth_url = config::spotify_apiauth_url()?,
        client_id = config::spotify_client_id()?,
        redirect_uri = config::spotify_redirect_uri()?,
        code_challenge = code_challenge,
        scope = config::spotify_scope()?.replace(' ', "%20")
    );

    // Store verifier in shared state before redirect
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier,
            token: None,
        });
    }

    let server_state = Arc::clone(&shared_state);
    let server = tokio::spawn(async move { start_api_server(server_state).await });

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let token = wait_for_token(shared_state).await;
    server.abort();

    match token {
        Some(t) => {
            TokenManager::new(t.clone()).persist().await?;
            Ok(t)
        }
        None => Err(CurateError::Auth(
            "Authentication failed or timed out.".to_string(),
        )),
    }
}

/// Polls the shared state once per second until the callback stored a token
/// or 60 seconds have passed.
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(token) = lock.as_ref().and_then(|p| p.token.clone()) {
            return Some(token);
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges a refresh token for a new access token.
///
/// The returned token carries an empty `refresh_token` when Spotify did not
/// rotate it; [`TokenManager::refresh`] keeps the previous one in that case.
pub async fn refresh_token(refresh_token: &str) -> Result<Token> {
    let client_id = config::spotify_client_id()?;

    let client = Client::new();
    let res = client
        .post(config::spotify_apitoken_url()?)
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id.as_str()),
        ])
        .send()
        .await?;

    let status = res.status();
    let json: Value = res.json().await?;
    if !status.is_success() {
        return Err(CurateError::Auth(format!(
            "Token refresh rejected ({}): {}. Please run sporlist auth",
            status.as_u16(),
            json["error_description"].as_str().unwrap_or("unknown error")
        )));
    }

    token_from_json(&json)
}

/// Exchanges an authorization code and its PKCE verifier for a token.
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Result<Token> {
    let client_id = config::spotify_client_id()?;
    let redirect_uri = config::spotify_redirect_uri()?;

    let client = Client::new();
    let res = client
        .post(config::spotify_apitoken_url()?)
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let json: Value = res.json().await?;
    token_from_json(&json)
}

fn token_from_json(json: &Value) -> Result<Token> {
    let access_token = json["access_token"]
        .as_str()
        .ok_or_else(|| CurateError::Auth("Token response without access_token".to_string()))?;

    Ok(Token {
        access_token: access_token.to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_u64().unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    })
}
