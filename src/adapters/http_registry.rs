//! HTTP-backed client registry.

use crate::domain::model::ClientCode;
use crate::domain::ports::ClientRegistry;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Serialize)]
struct LookupRequest<'a> {
    codes: Vec<&'a str>,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    codes: Vec<String>,
}

/// Talks to the authoritative client registry over HTTP: one POST with the
/// full candidate list, one response with the subset it knows.
#[derive(Debug, Clone)]
pub struct HttpRegistry {
    endpoint: String,
    client: Client,
}

impl HttpRegistry {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ClientRegistry for HttpRegistry {
    async fn filter_existing(
        &self,
        candidates: &HashSet<ClientCode>,
    ) -> Result<HashSet<ClientCode>> {
        let mut codes: Vec<&str> = candidates.iter().map(ClientCode::as_str).collect();
        codes.sort_unstable();

        tracing::debug!(
            endpoint = %self.endpoint,
            candidates = codes.len(),
            "registry lookup"
        );
        let response = self
            .client
            .post(&self.endpoint)
            .json(&LookupRequest { codes })
            .send()
            .await?
            .error_for_status()?;

        let body: LookupResponse = response.json().await?;
        Ok(body
            .codes
            .iter()
            .filter_map(|code| ClientCode::parse(code))
            .collect())
    }
}
