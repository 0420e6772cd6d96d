//! Remote card-lookup API configuration.

use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    String::from("https://api.scryfall.com/cards/named")
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    String::from("SparkArcanum/0.1 (card data pipeline)")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScryfallConfig {
    /// Exact-name lookup endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Wall-clock limit per lookup request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent the API operator asks clients to send.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ScryfallConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}
