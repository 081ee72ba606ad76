use axum::response::Json;
use serde_json::{Value, json};

use crate::management::TokenManager;

/// Reports the server version and whether `sporlist auth` already cached a token.
pub async fn health() -> Json<Value> {
    let mgr = TokenManager::load().await.ok();
    Json(json!({
        "status": "ok",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "token": token_status(mgr.as_ref()),
    }))
}

pub fn token_status(mgr: Option<&TokenManager>) -> Value {
    match mgr {
        Some(mgr) => json!({
            "cached": true,
            "expired": mgr.is_expired(),
            "scope": mgr.current_token().scope,
        }),
        None => json!({ "cached": false }),
    }
}
