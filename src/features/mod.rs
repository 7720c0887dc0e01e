//! Bag-of-words feature extraction
//!
//! Text is lowercased and split on non-alphanumeric characters; each known
//! token maps to a column in a sparse count matrix. The vocabulary is frozen
//! once fitted, so the serving process always projects messages into the
//! exact feature space the model was trained on.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single sparse feature row as `(column, count)` pairs.
pub type FeatureRow = Vec<(usize, f64)>;

/// Sparse row-major count matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    rows: Vec<FeatureRow>,
    columns: usize,
}

impl FeatureMatrix {
    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    pub fn row(&self, i: usize) -> &FeatureRow {
        &self.rows[i]
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.columns
    }

    /// New matrix holding the given rows, in the given order. Used to carve
    /// the train and test sets out of the full matrix after the split.
    pub fn select(&self, indices: &[usize]) -> FeatureMatrix {
        FeatureMatrix {
            rows: indices.iter().map(|&i| self.rows[i].clone()).collect(),
            columns: self.columns,
        }
    }
}

/// Anything that can project raw text into the model's feature space.
pub trait FeatureExtractor {
    /// Transform a batch of texts into a sparse count matrix.
    fn transform(&self, texts: &[&str]) -> FeatureMatrix;

    /// Transform a single text into one sparse row.
    fn transform_one(&self, text: &str) -> FeatureRow;
}

/// Word-count vectorizer with a vocabulary frozen at fit time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountVectorizer {
    /// token -> column index
    vocabulary: HashMap<String, usize>,
}

impl CountVectorizer {
    pub fn new() -> Self {
        Self {
            vocabulary: HashMap::new(),
        }
    }

    /// Build the vocabulary over `texts` and return their count matrix.
    ///
    /// Columns are assigned in first-seen token order, so fitting the same
    /// texts always produces the same vocabulary.
    pub fn fit_transform(&mut self, texts: &[&str]) -> FeatureMatrix {
        self.vocabulary.clear();

        for text in texts {
            for token in tokenize(text) {
                let next = self.vocabulary.len();
                self.vocabulary.entry(token).or_insert(next);
            }
        }

        self.transform(texts)
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub(crate) fn from_vocabulary(vocabulary: HashMap<String, usize>) -> Self {
        Self { vocabulary }
    }

    pub(crate) fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureExtractor for CountVectorizer {
    fn transform(&self, texts: &[&str]) -> FeatureMatrix {
        let rows = texts.iter().map(|t| self.transform_one(t)).collect();
        FeatureMatrix {
            rows,
            columns: self.vocabulary.len(),
        }
    }

    /// Unknown tokens contribute nothing; an all-unknown or empty text maps
    /// to the zero vector.
    fn transform_one(&self, text: &str) -> FeatureRow {
        let mut counts: HashMap<usize, f64> = HashMap::new();

        for token in tokenize(text) {
            if let Some(&column) = self.vocabulary.get(&token) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        let mut row: FeatureRow = counts.into_iter().collect();
        row.sort_unstable_by_key(|&(column, _)| column);
        row
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>()
        .into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_transform_counts_term_frequency() {
        let mut vectorizer = CountVectorizer::new();
        let matrix = vectorizer.fit_transform(&["free free prize", "hello world"]);

        assert_eq!(matrix.n_rows(), 2);
        assert_eq!(matrix.n_columns(), 4);
        // "free" is the first token seen, so it occupies column 0.
        assert_eq!(matrix.row(0), &vec![(0, 2.0), (1, 1.0)]);
    }

    #[test]
    fn refitting_same_texts_reproduces_shape() {
        let texts = ["one two three", "two three four"];

        let mut a = CountVectorizer::new();
        let first = a.fit_transform(&texts);
        let again = a.transform(&texts);

        assert_eq!(first, again);
    }

    #[test]
    fn unknown_tokens_are_ignored() {
        let mut vectorizer = CountVectorizer::new();
        vectorizer.fit_transform(&["hello world"]);

        let row = vectorizer.transform_one("completely unseen words");
        assert!(row.is_empty());
    }

    #[test]
    fn empty_text_is_the_zero_vector() {
        let mut vectorizer = CountVectorizer::new();
        vectorizer.fit_transform(&["hello world"]);

        assert!(vectorizer.transform_one("").is_empty());
    }

    #[test]
    fn tokenization_lowercases_and_splits_on_punctuation() {
        let mut vectorizer = CountVectorizer::new();
        vectorizer.fit_transform(&["Hello, WORLD!"]);

        let row = vectorizer.transform_one("hello world");
        assert_eq!(row, vec![(0, 1.0), (1, 1.0)]);
    }
}
