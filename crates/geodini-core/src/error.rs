// crates/geodini-core/src/error.rs
use thiserror::Error;

/// Everything that can go wrong in the search client.
///
/// Search failures ([`GeodiniError::is_search_failure`]) leave the previously
/// rendered results untouched. Map failures leave the drawer untouched. None of
/// them end the session.
#[derive(Debug, Error)]
pub enum GeodiniError {
    /// The request could not complete (DNS, TLS, connection reset, timeout...).
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-2xx status.
    #[error("API error: {status}")]
    Api { status: u16 },

    /// The body was not a search response.
    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("No result at index {0}")]
    NoSuchResult(usize),

    #[error("No geometry data available for this location.")]
    MissingGeometry { index: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl GeodiniError {
    /// Transport, status and decoding failures are reported the same way.
    pub fn is_search_failure(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Api { .. } | Self::InvalidResponse(_)
        )
    }

    /// Text shown to the user in a non-blocking notice.
    pub fn notice(&self) -> String {
        match self {
            // Out-of-range lookups read the same as missing geometry.
            Self::NoSuchResult(_) | Self::MissingGeometry { .. } => {
                "No geometry data available for this location.".to_string()
            }
            other => format!("Error: {other}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, GeodiniError>;
