use thiserror::Error;

/// Errors produced while talking to Spotify or running the curation pipeline.
///
/// `NotFound` is kept apart from the other service failures so the command
/// layer can re-prompt when a manually entered playlist id does not resolve.
/// Everything else is fatal to the current operation and is never retried.
#[derive(Debug, Error)]
pub enum CurateError {
    /// The requested resource does not exist (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Spotify answered with a non-success status other than 404.
    #[error("Spotify service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// Network failure or undecodable response body.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Missing or unusable access token.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Missing configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Token cache could not be read or written.
    #[error("Cache error: {0}")]
    Cache(String),

    /// Interactive prompt could not read an answer.
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl CurateError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CurateError::NotFound(_))
    }
}

impl From<std::env::VarError> for CurateError {
    fn from(err: std::env::VarError) -> Self {
        CurateError::Config(err.to_string())
    }
}

impl From<std::io::Error> for CurateError {
    fn from(err: std::io::Error) -> Self {
        CurateError::Cache(err.to_string())
    }
}

impl From<serde_json::Error> for CurateError {
    fn from(err: serde_json::Error) -> Self {
        CurateError::Cache(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CurateError>;
