//! Training pipeline
//!
//! Single-threaded batch job: load the dataset, build the count matrix,
//! split with a fixed seed, fit the classifier, evaluate on the held-out
//! set, append a log entry and persist the artifacts. Fails fast on any
//! error; there is no partial recovery or checkpointing.

pub mod report;

use std::fmt;

use tracing::info;

use crate::artifacts;
use crate::config::Config;
use crate::dataset::{self, Label};
use crate::error::Result;
use crate::features::{CountVectorizer, FeatureMatrix};
use crate::model::{Classifier, LogisticRegression, TrainParams};

/// 2x2 table of counts over (actual, predicted), ham = 0, spam = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfusionMatrix {
    counts: [[u32; 2]; 2],
}

impl ConfusionMatrix {
    pub fn record(&mut self, actual: Label, predicted: Label) {
        self.counts[actual.index()][predicted.index()] += 1;
    }

    pub fn count(&self, actual: Label, predicted: Label) -> u32 {
        self.counts[actual.index()][predicted.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().flatten().sum()
    }

    pub fn correct(&self) -> u32 {
        self.counts[0][0] + self.counts[1][1]
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[[{}, {}],", self.counts[0][0], self.counts[0][1])?;
        write!(f, " [{}, {}]]", self.counts[1][0], self.counts[1][1])
    }
}

/// Summary statistics of one training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingOutcome {
    pub accuracy: f64,
    pub confusion: ConfusionMatrix,
}

/// Accuracy and confusion matrix on a held-out set.
pub fn evaluate(
    model: &impl Classifier,
    matrix: &FeatureMatrix,
    labels: &[Label],
) -> TrainingOutcome {
    let mut confusion = ConfusionMatrix::default();

    for (row, &actual) in matrix.rows().iter().zip(labels) {
        confusion.record(actual, model.predict(row));
    }

    let accuracy = if confusion.total() == 0 {
        0.0
    } else {
        confusion.correct() as f64 / confusion.total() as f64
    };

    TrainingOutcome { accuracy, confusion }
}

/// Run the full pipeline described by `config`.
pub fn run(config: &Config) -> Result<TrainingOutcome> {
    let training = &config.training;

    info!("Loading dataset from {}", training.dataset_path);
    let examples = dataset::load_dataset(&training.dataset_path)?;
    info!("Loaded {} examples", examples.len());

    let texts: Vec<&str> = examples.iter().map(|e| e.text.as_str()).collect();
    let labels: Vec<Label> = examples.iter().map(|e| e.label).collect();

    let mut vectorizer = CountVectorizer::new();
    let matrix = vectorizer.fit_transform(&texts);
    info!("Vocabulary size: {}", vectorizer.vocabulary_len());

    let (train_idx, test_idx) =
        dataset::train_test_split(examples.len(), training.test_ratio, training.split_seed)?;

    let train_matrix = matrix.select(&train_idx);
    let train_labels: Vec<Label> = train_idx.iter().map(|&i| labels[i]).collect();
    let test_matrix = matrix.select(&test_idx);
    let test_labels: Vec<Label> = test_idx.iter().map(|&i| labels[i]).collect();

    let params = TrainParams {
        learning_rate: training.learning_rate,
        max_iterations: training.max_iterations,
        ..TrainParams::default()
    };
    let model = LogisticRegression::fit(&train_matrix, &train_labels, params)?;

    let outcome = evaluate(&model, &test_matrix, &test_labels);
    info!("Accuracy: {:.2}", outcome.accuracy);
    info!("Confusion matrix:\n{}", outcome.confusion);

    report::append_entry(&training.log_path, &training.dataset_name, &outcome)?;

    artifacts::save(
        &model,
        &vectorizer,
        &config.artifacts.model_path,
        &config.artifacts.vectorizer_path,
    )?;
    info!(
        "Artifacts written to {} and {}",
        config.artifacts.model_path, config.artifacts.vectorizer_path
    );

    Ok(outcome)
}
