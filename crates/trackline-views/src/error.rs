//! Error types for Trackline Views

use thiserror::Error;

/// Result type alias using the crate's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Failures a page load can hit on its way to the GraphQL API.
///
/// Page loaders do not distinguish the variants: any of them degrades
/// the whole page the same way. The split exists for logging and for
/// callers that want to inspect what actually went wrong.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Network error: {0}. Check that the Trackline backend is reachable.")]
    Network(#[from] reqwest::Error),

    #[error("Server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("GraphQL error: {0}")]
    Graph(String),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// True when the failure happened before a response arrived
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
