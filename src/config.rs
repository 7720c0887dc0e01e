use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub training: TrainingConfig,
    pub artifacts: ArtifactConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrainingConfig {
    pub dataset_path: String,
    /// Human-readable name recorded in the training log.
    pub dataset_name: String,
    pub test_ratio: f64,
    pub split_seed: u64,
    pub max_iterations: usize,
    pub learning_rate: f64,
    pub log_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtifactConfig {
    pub model_path: String,
    pub vectorizer_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::SpamError::Config(e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| crate::error::SpamError::Config(e.to_string()))
    }

    pub fn default() -> Self {
        Self {
            server: ServerConfig {
                listen_addr: "0.0.0.0:8000".to_string(),
            },
            training: TrainingConfig {
                dataset_path: "data/raw/SMSSpamCollection".to_string(),
                dataset_name: "SMS Spam Collection".to_string(),
                test_ratio: 0.3,
                split_seed: 42,
                max_iterations: 1000,
                learning_rate: 0.1,
                log_path: "docs/notas.md".to_string(),
            },
            artifacts: ArtifactConfig {
                model_path: "models/spam_model.json".to_string(),
                vectorizer_path: "models/vectorizer.json".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}
