//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default number of records per import batch.
const fn default_batch_size() -> u32 {
    100
}

/// Default result limit for search commands.
const fn default_search_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Records per transaction during bulk import.
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,

    /// Default result limit for `spk search`.
    #[serde(default = "default_search_limit")]
    pub search_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            search_limit: default_search_limit(),
        }
    }
}
