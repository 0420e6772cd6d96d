//! MTGJSON bulk-data configuration.

use serde::{Deserialize, Serialize};

fn default_bulk_path() -> String {
    String::from(".spark/AllPrintings.json")
}

fn default_download_url() -> String {
    String::from("https://mtgjson.com/api/v5/AllPrintings.json")
}

/// The bulk file is large (~hundreds of MB); allow a generous window.
const fn default_download_timeout_secs() -> u64 {
    300
}

fn default_user_agent() -> String {
    String::from("SparkArcanum/0.1 (bulk data refresh)")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MtgJsonConfig {
    /// Where the AllPrintings document lives on disk.
    #[serde(default = "default_bulk_path")]
    pub bulk_path: String,

    /// Upstream bulk-data endpoint.
    #[serde(default = "default_download_url")]
    pub download_url: String,

    /// Wall-clock limit for the one-time bulk download.
    #[serde(default = "default_download_timeout_secs")]
    pub download_timeout_secs: u64,

    /// User agent sent with bulk downloads.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for MtgJsonConfig {
    fn default() -> Self {
        Self {
            bulk_path: default_bulk_path(),
            download_url: default_download_url(),
            download_timeout_secs: default_download_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MtgJsonConfig;

    #[test]
    fn defaults_are_correct() {
        let config = MtgJsonConfig::default();
        assert_eq!(config.bulk_path, ".spark/AllPrintings.json");
        assert!(config.download_url.starts_with("https://mtgjson.com/"));
        assert_eq!(config.download_timeout_secs, 300);
        assert!(config.user_agent.starts_with("SparkArcanum/"));
    }
}
