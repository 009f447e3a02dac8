// crates/geodini-core/src/client.rs
#![cfg(feature = "http")]

//! # Search Client
//!
//! Blocking transport for native tools. Handles the physical layer (HTTP,
//! status codes) and delegates body parsing to
//! [`SearchResponse::from_slice`].

use crate::config::ClientConfig;
use crate::error::{GeodiniError, Result};
use crate::model::SearchResponse;
use std::time::Duration;
use tracing::{debug, instrument};

pub struct SearchClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl SearchClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("geodini-core/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeodiniError::Network(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: config.search_endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `GET {base_url}/search?query=<query>`.
    ///
    /// Transport failures map to [`GeodiniError::Network`], non-2xx statuses
    /// to [`GeodiniError::Api`].
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub fn search(&self, query: &str) -> Result<SearchResponse> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("query", query)])
            .send()
            .map_err(|e| GeodiniError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeodiniError::Api {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .map_err(|e| GeodiniError::Network(e.to_string()))?;
        debug!(bytes = body.len(), "search response received");
        SearchResponse::from_slice(&body)
    }
}
