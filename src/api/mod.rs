//! Media API Client
//!
//! HTTP bindings to the remote collection API, organized the same way for
//! every call: build request, send, classify the envelope.

mod collection;
mod envelope;

pub use envelope::{interpret, Envelope};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};

/// HTTP client for the media collection API
#[derive(Debug, Clone)]
pub struct MediaApi {
    config: ApiConfig,
    client: reqwest::Client,
}

impl MediaApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Sends a request and classifies the response envelope
    async fn send<T: DeserializeOwned>(
        &self,
        label: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<Envelope<T>> {
        debug!(request = label, "sending");
        let response = request
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!(request = label, error = %e, "request failed");
                ApiError::Transport(e.to_string())
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            warn!(request = label, status, error = %e, "failed to read response body");
            ApiError::Transport(e.to_string())
        })?;

        let result = interpret(status, &body);
        match &result {
            Ok(_) => debug!(request = label, status, "ok"),
            Err(e) => warn!(request = label, status, error = %e, "request rejected"),
        }
        result
    }
}
