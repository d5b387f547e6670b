//! SoilSense - Soil Nutrient Deficiency Predictor
//!
//! Serves a single-page bilingual (English/Kannada) form backed by a
//! pre-trained nutrient sufficiency classifier and optional Kannada
//! voice output.
//!
//! # Usage
//!
//! ```bash
//! # Run with the bundled model artifact
//! cargo run --release
//!
//! # Run against a different artifact
//! cargo run --release -- --model /path/to/model.json
//!
//! # Validate an artifact and exit
//! cargo run --release -- --check
//! ```
//!
//! # Environment Variables
//!
//! - `SOILSENSE_CONFIG`: Path to a TOML config file (default: ./soilsense.toml)
//! - `RUST_LOG`: Logging level (default: info)

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;

use soilsense::api::{create_app, ApiState};
use soilsense::classifier::TreeEnsembleModel;
use soilsense::config::{self, AppConfig};
use soilsense::speech::{AudioStore, GoogleTranslateTts};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "soilsense")]
#[command(about = "Soil Nutrient Deficiency Predictor")]
#[command(version)]
struct CliArgs {
    /// Override the server address (default: "0.0.0.0:8080")
    #[arg(short, long)]
    addr: Option<String>,

    /// Override the model artifact path
    #[arg(long)]
    model: Option<String>,

    /// Load and validate the model artifact, then exit
    #[arg(long)]
    check: bool,
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    // Load deployment configuration
    let mut app_config = AppConfig::load();
    if let Some(model) = args.model {
        app_config.model.path = model;
    }
    if let Some(addr) = args.addr {
        app_config.server.addr = addr;
    }
    app_config.validate().context("Invalid configuration")?;
    config::init(app_config);

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("  SoilSense - Soil Nutrient Deficiency Predictor");
    info!("  Bilingual advisory (English / ಕನ್ನಡ) with voice output");
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("");

    // Load the model artifact. A missing or invalid artifact is fatal:
    // the application never partially serves without a classifier.
    let model_path = &config::get().model.path;
    let model = TreeEnsembleModel::load_from_file(Path::new(model_path))
        .with_context(|| format!("Cannot load model artifact from {model_path}"))?;

    if args.check {
        info!("Model artifact OK: {}", model.metadata().name);
        return Ok(());
    }

    // Speech synthesizer client
    let speech_config = &config::get().speech;
    let synthesizer = GoogleTranslateTts::new(
        &speech_config.endpoint,
        Duration::from_secs(speech_config.timeout_secs),
    )
    .context("Failed to build speech client")?;

    // Audio artifact store — prune anything left behind by a previous run
    let audio_config = &config::get().audio;
    let audio_store = AudioStore::open(Path::new(&audio_config.dir))
        .with_context(|| format!("Cannot open audio artifact dir {}", audio_config.dir))?;
    match audio_store.prune_older_than(Duration::from_secs(audio_config.max_age_hours * 3600)) {
        Ok(0) => {}
        Ok(n) => info!("Pruned {} stale audio artifacts", n),
        Err(e) => tracing::warn!("Failed to prune audio artifacts: {}", e),
    }

    let state = ApiState {
        classifier: Arc::new(model),
        synthesizer: Arc::new(synthesizer),
        audio_store: Arc::new(audio_store),
    };
    let app = create_app(state);

    // Graceful shutdown via Ctrl+C
    let cancel_token = CancellationToken::new();
    let shutdown_token = cancel_token.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("🛑 Received Ctrl+C, initiating shutdown...");
        shutdown_token.cancel();
    });

    let server_addr = &config::get().server.addr;
    let listener = tokio::net::TcpListener::bind(server_addr)
        .await
        .with_context(|| format!("Failed to bind to {server_addr}"))?;

    info!("✓ HTTP server listening on {}", server_addr);
    info!("");
    info!("🌱 Form available at: http://{}", server_addr);
    info!("");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            cancel_token.cancelled().await;
            info!("[HttpServer] Received shutdown signal");
        })
        .await
        .context("HTTP server error")?;

    info!("[HttpServer] Graceful shutdown complete");
    Ok(())
}
