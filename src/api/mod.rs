//! # API Module
//!
//! HTTP endpoints served by the short-lived local server that runs while
//! `sporlist auth` waits for Spotify to redirect back.
//!
//! - [`callback`] - Receives the authorization code, exchanges it together with
//!   the PKCE verifier for a token and stores the token in the shared state the
//!   auth flow is polling.
//! - [`health`] - Reports status, version and whether a token is cached, handy
//!   to check that the redirect URI points at the right address.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use sporlist::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::{health, token_status};
