//! Labeled dataset loading and splitting
//!
//! The dataset is a tab-separated file with two columns `(label, text)` and
//! no header row, e.g. the SMS Spam Collection.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{Result, SpamError};

/// Binary class label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Ham,
    Spam,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Ham => "ham",
            Label::Spam => "spam",
        }
    }

    /// Class index used throughout the crate: ham = 0, spam = 1.
    pub fn index(&self) -> usize {
        match self {
            Label::Ham => 0,
            Label::Spam => 1,
        }
    }

}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single labeled example
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub label: Label,
    pub text: String,
}

/// Load a tab-separated `(label, text)` dataset.
///
/// Any row that does not have exactly two columns is fatal; there is no
/// partial recovery. Trailing empty lines are tolerated.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<Example>> {
    let content = std::fs::read_to_string(path)?;
    let mut examples = Vec::new();

    for (i, line) in content.lines().enumerate() {
        if line.is_empty() {
            continue;
        }

        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() != 2 {
            return Err(SpamError::DataFormat {
                line: i + 1,
                found: columns.len(),
            });
        }

        let label = match columns[0] {
            "ham" => Label::Ham,
            "spam" => Label::Spam,
            other => {
                return Err(SpamError::UnknownLabel {
                    line: i + 1,
                    label: other.to_string(),
                })
            }
        };

        examples.push(Example {
            label,
            text: columns[1].to_string(),
        });
    }

    Ok(examples)
}

/// Split row indices into train and test sets.
///
/// The shuffle is driven by a seeded RNG so that repeated runs with the same
/// seed produce the same split, which keeps evaluation numbers reproducible.
/// A ratio outside `0.0..=1.0` is a configuration error.
pub fn train_test_split(n: usize, test_ratio: f64, seed: u64) -> Result<(Vec<usize>, Vec<usize>)> {
    if !(0.0..=1.0).contains(&test_ratio) {
        return Err(SpamError::Config(format!(
            "test_ratio must be between 0.0 and 1.0, got {test_ratio}"
        )));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test_size = (n as f64 * test_ratio) as usize;
    let test = indices.split_off(n - test_size);
    Ok((indices, test))
}
