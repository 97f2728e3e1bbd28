//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section is optional and falls back to its defaults.

mod cors;
mod model;
mod quotes;
mod server;
mod validation;

pub use cors::FileCorsConfig;
pub use model::FileModelConfig;
pub use quotes::FileQuotesConfig;
pub use server::FileServerConfig;
pub use validation::{ConfigIssue, Severity};

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP listener settings
    pub server: FileServerConfig,
    /// Model artifact locations
    pub model: FileModelConfig,
    /// Quote service settings
    pub quotes: FileQuotesConfig,
    /// Cross-origin settings
    pub cors: FileCorsConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Errors mean the service must not start; warnings describe settings
    /// that will be ignored.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.quotes.timeout_secs == 0 {
            issues.push(ConfigIssue::error("quotes.timeout_secs must be greater than 0"));
        }
        if self.quotes.url.trim().is_empty() {
            issues.push(ConfigIssue::error("quotes.url cannot be empty"));
        } else if reqwest::Url::parse(&self.quotes.url).is_err() {
            issues.push(ConfigIssue::error(format!(
                "quotes.url: '{}' is not a valid URL",
                self.quotes.url
            )));
        }

        if self.model.vectorizer_path.as_os_str().is_empty() {
            issues.push(ConfigIssue::error("model.vectorizer_path cannot be empty"));
        }
        if self.model.classifier_path.as_os_str().is_empty() {
            issues.push(ConfigIssue::error("model.classifier_path cannot be empty"));
        }

        for origin in self.cors.invalid_origins() {
            issues.push(ConfigIssue::warning(format!(
                "cors.allowed_origins: '{}' is not a valid origin and will be skipped",
                origin
            )));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml_str = r#"
[server]
port = 9000

[quotes]
timeout_secs = 3
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.quotes.timeout_secs, 3);
        assert_eq!(config.quotes.url, "https://zenquotes.io/api/random");
        assert_eq!(
            config.model.vectorizer_path,
            PathBuf::from("sentiment_vectorizer.json")
        );
    }

    #[test]
    fn test_validate_reports_errors_and_warnings() {
        let toml_str = r#"
[quotes]
url = ""
timeout_secs = 0

[model]
classifier_path = ""

[cors]
allowed_origins = ["not an origin", "https://ok.example"]
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();

        let errors: Vec<_> = issues.iter().filter(|i| i.is_error()).collect();
        let warnings: Vec<_> = issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .collect();

        assert_eq!(errors.len(), 3);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("not an origin"));
    }

    #[test]
    fn test_invalid_quote_url() {
        let mut config = FileConfig::default();
        config.quotes.url = "zenquotes".to_string();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }
}
