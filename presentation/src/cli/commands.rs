//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for sentiquote
#[derive(Parser, Debug)]
#[command(name = "sentiquote")]
#[command(author, version, about = "Sentiment-aware inspirational quote API")]
#[command(long_about = r#"
Sentiquote serves an HTTP API that classifies the sentiment of a piece of text
and pairs it with a random inspirational quote.

Endpoints:
  GET  /          Liveness check
  POST /predict   {"text": "..."} -> {"sentiment": "...", "quote": {...}}

The vectorizer and classifier artifacts are loaded once at startup; the
server refuses to start if either is missing or corrupt.

Configuration is loaded from (in priority order):
1. SENTIQUOTE_* environment variables (e.g. SENTIQUOTE_SERVER__PORT=9000)
2. --config <path>       Explicit config file
3. ./sentiquote.toml     Project-level config
4. ~/.config/sentiquote/config.toml   Global config

Command-line flags override all of the above.

Example:
  sentiquote --port 8080
  sentiquote --vectorizer models/vec.json --classifier models/clf.json -v
"#)]
pub struct Cli {
    /// Interface to bind
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to bind
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Path to the vectorizer artifact
    #[arg(long, value_name = "PATH")]
    pub vectorizer: Option<PathBuf>,

    /// Path to the classifier artifact
    #[arg(long, value_name = "PATH")]
    pub classifier: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}
