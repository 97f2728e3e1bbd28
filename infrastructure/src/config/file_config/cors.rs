//! CORS configuration from TOML (`[cors]` section)

use serde::{Deserialize, Serialize};

/// Cross-origin access settings.
///
/// Only the origin allow-list is configurable: every method and header is
/// allowed and credentials are always enabled.
///
/// # Example
///
/// ```toml
/// [cors]
/// allowed_origins = ["https://quotes.example.com"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for FileCorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

impl FileCorsConfig {
    /// Origins that are a bare `http(s)://host[:port]`.
    pub fn valid_origins(&self) -> Vec<&str> {
        self.allowed_origins
            .iter()
            .map(String::as_str)
            .filter(|origin| is_valid_origin(origin))
            .collect()
    }

    /// Origins that will be skipped.
    pub fn invalid_origins(&self) -> Vec<&str> {
        self.allowed_origins
            .iter()
            .map(String::as_str)
            .filter(|origin| !is_valid_origin(origin))
            .collect()
    }
}

fn is_valid_origin(origin: &str) -> bool {
    let Ok(url) = reqwest::Url::parse(origin) else {
        return false;
    };
    matches!(url.scheme(), "http" | "https")
        && url.host_str().is_some()
        && url.path() == "/"
        && !origin.ends_with('/')
        && url.query().is_none()
}
