use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use spamdetect_rs::api::{ApiServer, AppState};
use spamdetect_rs::artifacts;
use spamdetect_rs::config::Config;
use spamdetect_rs::training;

#[derive(Parser)]
#[command(name = "spamdetect-rs", about = "Spam/ham text classifier", version)]
struct Cli {
    /// Path to a TOML config file (defaults to config.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Train the classifier and persist the artifacts
    Train,
    /// Serve predictions from previously saved artifacts
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None if std::path::Path::new("config.toml").exists() => Config::from_file("config.toml")?,
        None => Config::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    match cli.command {
        Command::Train => {
            let outcome = training::run(&config).context("training run failed")?;
            info!(
                "Training complete: accuracy {:.2} over {} held-out examples",
                outcome.accuracy,
                outcome.confusion.total()
            );
        }
        Command::Serve => {
            // Refuse to start without a complete artifact pair.
            let (model, vectorizer) = artifacts::load(
                &config.artifacts.model_path,
                &config.artifacts.vectorizer_path,
            )
            .context("failed to load model artifacts; run `train` first")?;

            let state = AppState {
                classifier: Box::new(model),
                extractor: Box::new(vectorizer),
            };

            ApiServer::new(state, config.server.listen_addr.clone())
                .run()
                .await?;
        }
    }

    Ok(())
}
