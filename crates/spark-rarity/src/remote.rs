//! Remote exact-name rarity lookup, the bulk-data stand-in.
//!
//! Only consulted when no bulk reference data could be loaded at all.
//! Failures of any kind — network, status, decode, missing field — are
//! swallowed and reported as "no answer": the heuristic step backs this one
//! up, so surfacing errors would add noise without changing the outcome.

use std::time::Duration;

use serde::Deserialize;

use crate::error::RarityError;

/// Response body of an exact-name card lookup. Only the field we need.
#[derive(Debug, Deserialize)]
struct NamedCardResponse {
    rarity: Option<String>,
}

pub struct RemoteClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RemoteClient {
    /// Build a client with a per-request timeout and a fixed user agent.
    ///
    /// # Errors
    ///
    /// Returns `RarityError::Http` if the client cannot be constructed.
    pub fn new(endpoint: &str, timeout: Duration, user_agent: &str) -> Result<Self, RarityError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
        })
    }

    /// Rarity reported for an exact name, or `None` for any failure.
    pub async fn rarity_by_name(&self, name: &str) -> Option<String> {
        match self.fetch(name).await {
            Ok(rarity) => rarity,
            Err(error) => {
                tracing::debug!(%name, %error, "remote rarity lookup failed; treating as no match");
                None
            }
        }
    }

    async fn fetch(&self, name: &str) -> Result<Option<String>, reqwest::Error> {
        let url = format!("{}?exact={}", self.endpoint, urlencoding::encode(name));
        let response = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<NamedCardResponse>()
            .await?;
        Ok(response
            .rarity
            .map(|rarity| rarity.to_lowercase())
            .filter(|rarity| !rarity.is_empty()))
    }
}
