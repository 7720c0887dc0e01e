//! spamdetect-rs: spam/ham text classifier
//!
//! Trains a binary text classifier (spam vs. ham) over a bag-of-words
//! representation with logistic regression, persists the fitted model and
//! vectorizer as documented JSON artifacts, and serves predictions through
//! a single HTTP endpoint.
//!
//! Two independent flows share nothing at runtime but the artifact files:
//!
//! - **Training**: load TSV dataset → count matrix → seeded split → fit →
//!   evaluate (accuracy + confusion matrix) → append log entry → save.
//! - **Serving**: load artifacts at startup, answer `POST /predict` with
//!   `{message, prediction, probability}`. Stateless per request.
//!
//! # Example
//!
//! ```no_run
//! use spamdetect_rs::api::{ApiServer, AppState};
//! use spamdetect_rs::{artifacts, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let (model, vectorizer) = artifacts::load(
//!         &config.artifacts.model_path,
//!         &config.artifacts.vectorizer_path,
//!     )?;
//!
//!     let state = AppState {
//!         classifier: Box::new(model),
//!         extractor: Box::new(vectorizer),
//!     };
//!
//!     ApiServer::new(state, config.server.listen_addr.clone())
//!         .run()
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`dataset`]: TSV loading and seeded train/test split
//! - [`features`]: Bag-of-words vectorizer and sparse matrix
//! - [`model`]: Logistic regression classifier
//! - [`training`]: Pipeline orchestration, evaluation, run log
//! - [`artifacts`]: Model/vectorizer persistence
//! - [`api`]: HTTP prediction endpoint

pub mod api;
pub mod artifacts;
pub mod config;
pub mod dataset;
pub mod error;
pub mod features;
pub mod model;
pub mod training;
