// crates/geodini-core/src/config.rs
use crate::error::{GeodiniError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.geodini.labs.sunu.in";

/// Client configuration.
///
/// Every field has a default, so a partial JSON object (or `{}`) is a valid
/// configuration:
///
/// ```rust
/// use geodini_core::ClientConfig;
///
/// let cfg = ClientConfig::from_json(r#"{ "base_url": "http://localhost:9000/" }"#).unwrap();
/// assert_eq!(cfg.search_endpoint(), "http://localhost:9000/search");
/// assert_eq!(cfg.query_param, "q");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Root of the search API, without the `/search` path.
    pub base_url: String,
    /// Address-bar parameter holding the last submitted query.
    pub query_param: String,
    /// Duration of the drawer slide-in; the map is re-measured after it.
    pub drawer_transition_ms: u32,
    /// Joins hierarchy levels in the results table.
    pub hierarchy_separator: String,
    /// Drop responses that land after a newer search was started. On by
    /// default; set it to `false` to let whichever response lands last win,
    /// as the hosted page does.
    pub discard_stale_responses: bool,
    /// Request timeout for the blocking client.
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            query_param: "q".to_string(),
            drawer_transition_ms: 300,
            hierarchy_separator: " > ".to_string(),
            discard_stale_responses: true,
            request_timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|e| GeodiniError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(GeodiniError::Config("base_url must not be empty".into()));
        }
        if self.query_param.is_empty() {
            return Err(GeodiniError::Config("query_param must not be empty".into()));
        }
        Ok(())
    }

    /// `{base_url}/search`, tolerant of a trailing slash on `base_url`.
    pub fn search_endpoint(&self) -> String {
        format!("{}/search", self.base_url.trim_end_matches('/'))
    }
}
