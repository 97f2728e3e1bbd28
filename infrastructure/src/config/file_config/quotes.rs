//! Quote service configuration from TOML (`[quotes]` section)

use crate::quotes::DEFAULT_QUOTE_URL;
use sentiquote_application::{DEFAULT_QUOTE_TIMEOUT, QuoteFetchPolicy};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw quote service configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuotesConfig {
    /// Random-quote endpoint
    pub url: String,
    /// Outbound request timeout in seconds
    pub timeout_secs: u64,
    /// `User-Agent` sent to the quote service
    pub user_agent: String,
}

impl Default for FileQuotesConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_QUOTE_URL.to_string(),
            timeout_secs: DEFAULT_QUOTE_TIMEOUT.as_secs(),
            user_agent: concat!("sentiquote/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FileQuotesConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Convert to the application-layer fetch policy
    pub fn to_policy(&self) -> QuoteFetchPolicy {
        QuoteFetchPolicy::default().with_timeout(self.timeout())
    }
}
