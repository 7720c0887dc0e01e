//! Linear binary classifier
//!
//! Logistic regression over the sparse bag-of-words feature space, fitted by
//! batch gradient descent on the binary cross-entropy loss. The model is
//! immutable after training; the serving process only calls
//! [`Classifier::predict_proba`].

use serde::{Deserialize, Serialize};

use crate::dataset::Label;
use crate::error::{Result, SpamError};
use crate::features::{FeatureMatrix, FeatureRow};

/// Anything that can score a feature row into class probabilities.
pub trait Classifier {
    /// Class probabilities as `(p_ham, p_spam)`.
    fn predict_proba(&self, row: &FeatureRow) -> (f64, f64);

    /// Hard decision. `spam` only on a strict majority, so a 0.5/0.5 tie
    /// resolves to `ham`.
    fn predict(&self, row: &FeatureRow) -> Label {
        let (p_ham, p_spam) = self.predict_proba(row);
        if p_spam > p_ham {
            Label::Spam
        } else {
            Label::Ham
        }
    }
}

/// Gradient-descent hyperparameters.
#[derive(Debug, Clone, Copy)]
pub struct TrainParams {
    pub learning_rate: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for TrainParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            max_iterations: 1000,
            tolerance: 1e-6,
        }
    }
}

/// Logistic regression with one weight per vocabulary column plus a bias.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    weights: Vec<f64>,
    bias: f64,
}

impl LogisticRegression {
    pub(crate) fn from_parts(weights: Vec<f64>, bias: f64) -> Self {
        Self { weights, bias }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Fit the model on a count matrix and its labels.
    ///
    /// Deterministic for a fixed row order: full-batch gradients, no
    /// sampling. Stops early once the mean gradient norm drops below
    /// `tolerance`.
    pub fn fit(matrix: &FeatureMatrix, labels: &[Label], params: TrainParams) -> Result<Self> {
        if matrix.n_rows() != labels.len() {
            return Err(SpamError::Training(format!(
                "feature matrix has {} rows but {} labels were given",
                matrix.n_rows(),
                labels.len()
            )));
        }
        if matrix.n_rows() == 0 {
            return Err(SpamError::Training("empty training set".to_string()));
        }

        let n = matrix.n_rows() as f64;
        let mut weights = vec![0.0; matrix.n_columns()];
        let mut bias = 0.0;

        let mut grad_w = vec![0.0; matrix.n_columns()];
        for _ in 0..params.max_iterations {
            grad_w.iter_mut().for_each(|g| *g = 0.0);
            let mut grad_b = 0.0;

            for (row, label) in matrix.rows().iter().zip(labels) {
                let y = label.index() as f64;
                let p = sigmoid(dot(&weights, row) + bias);
                let residual = p - y;

                for &(column, value) in row {
                    grad_w[column] += residual * value;
                }
                grad_b += residual;
            }

            let grad_b = grad_b / n;
            let mut norm = grad_b * grad_b;
            for (w, g) in weights.iter_mut().zip(&grad_w) {
                let g = g / n;
                *w -= params.learning_rate * g;
                norm += g * g;
            }
            bias -= params.learning_rate * grad_b;

            if norm.sqrt() < params.tolerance {
                break;
            }
        }

        Ok(Self { weights, bias })
    }
}

impl Classifier for LogisticRegression {
    fn predict_proba(&self, row: &FeatureRow) -> (f64, f64) {
        let p_spam = sigmoid(dot(&self.weights, row) + self.bias);
        (1.0 - p_spam, p_spam)
    }
}

fn dot(weights: &[f64], row: &FeatureRow) -> f64 {
    row.iter()
        .filter(|&&(column, _)| column < weights.len())
        .map(|&(column, value)| weights[column] * value)
        .sum()
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
