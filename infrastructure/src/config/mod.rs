//! Configuration file loading for sentiquote
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SENTIQUOTE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./sentiquote.toml` or `./.sentiquote.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/sentiquote/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileCorsConfig, FileModelConfig, FileQuotesConfig,
    FileServerConfig, Severity,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
