//! Entrypoint for sentiquote
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use sentiquote_application::GenerateQuoteUseCase;
use sentiquote_infrastructure::{ArtifactSentimentModel, ConfigLoader, FileConfig, ZenQuotesClient};
use sentiquote_presentation::{AppState, Cli, cors_layer, create_router};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging: RUST_LOG wins, otherwise verbosity level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("info"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // === Configuration ===
    let loaded = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    };
    let mut config = loaded.map_err(|e| anyhow!("Failed to load configuration: {}", e))?;
    apply_overrides(&mut config, &cli);

    if cli.show_config {
        if !cli.no_config {
            ConfigLoader::print_config_sources(cli.config.as_ref());
            println!();
        }
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            error!("{}", issue);
        } else {
            warn!("{}", issue);
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration");
    }

    // === Dependency Injection ===
    // Model artifacts are loaded exactly once; there is no degraded mode
    let model = ArtifactSentimentModel::load(
        &config.model.vectorizer_path,
        &config.model.classifier_path,
    )
    .context("Failed to load model or vectorizer")?;

    let quotes = ZenQuotesClient::with_user_agent(&config.quotes.url, &config.quotes.user_agent)
        .context("Failed to build quote service client")?;

    let use_case = GenerateQuoteUseCase::new(Arc::new(model), Arc::new(quotes))
        .with_policy(config.quotes.to_policy());

    let router = create_router(
        AppState::new(use_case),
        cors_layer(&config.cors.valid_origins()),
    );

    // === Serve ===
    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Command-line flags take precedence over every config source.
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(path) = &cli.vectorizer {
        config.model.vectorizer_path = path.clone();
    }
    if let Some(path) = &cli.classifier {
        config.model.classifier_path = path.clone();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
