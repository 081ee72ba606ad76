use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{
    api, config,
    error::{CurateError, Result},
    types::PkceToken,
};

/// Serves the OAuth callback and health endpoints until the task is aborted.
pub async fn start_api_server(state: Arc<Mutex<Option<PkceToken>>>) -> Result<()> {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)));

    let addr = SocketAddr::from_str(&config::server_addr()?).map_err(|e| {
        CurateError::Config(format!("Failed to parse server address: {}", e))
    })?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| CurateError::Auth(format!("Cannot bind callback server on {}: {}", addr, e)))?;
    axum::serve(listener, app)
        .await
        .map_err(|e| CurateError::Auth(format!("Callback server stopped: {}", e)))
}
