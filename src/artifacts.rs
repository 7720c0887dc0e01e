//! Artifact persistence
//!
//! The fitted model and vectorizer are written as two self-describing JSON
//! files so they stay portable across implementations:
//!
//! - model file: `{format_version, classes, weights, bias}`
//! - vectorizer file: `{format_version, vocabulary}`
//!
//! Both carry a `format_version` and are loaded as a pair; a model whose
//! weight count disagrees with the vocabulary size is rejected, since such a
//! pair would silently produce meaningless predictions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{Result, SpamError};
use crate::features::CountVectorizer;
use crate::model::LogisticRegression;

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct ModelFile {
    format_version: u32,
    /// Class names in index order: `classes[0]` is the negative class.
    classes: Vec<String>,
    weights: Vec<f64>,
    bias: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct VectorizerFile {
    format_version: u32,
    vocabulary: HashMap<String, usize>,
}

/// Write the fitted pair to disk, creating parent directories as needed.
pub fn save<P: AsRef<Path>>(
    model: &LogisticRegression,
    vectorizer: &CountVectorizer,
    model_path: P,
    vectorizer_path: P,
) -> Result<()> {
    let model_file = ModelFile {
        format_version: FORMAT_VERSION,
        classes: vec!["ham".to_string(), "spam".to_string()],
        weights: model.weights().to_vec(),
        bias: model.bias(),
    };
    let vectorizer_file = VectorizerFile {
        format_version: FORMAT_VERSION,
        vocabulary: vectorizer.vocabulary().clone(),
    };

    write_json(model_path.as_ref(), &model_file)?;
    write_json(vectorizer_path.as_ref(), &vectorizer_file)?;
    Ok(())
}

/// Load a model/vectorizer pair.
///
/// A missing file is `ArtifactMissing`; an unreadable file, unknown format
/// version, or a dimension mismatch between the two files is `Artifact`.
pub fn load<P: AsRef<Path>>(
    model_path: P,
    vectorizer_path: P,
) -> Result<(LogisticRegression, CountVectorizer)> {
    let model_file: ModelFile = read_json(model_path.as_ref())?;
    let vectorizer_file: VectorizerFile = read_json(vectorizer_path.as_ref())?;

    if model_file.format_version != FORMAT_VERSION {
        return Err(SpamError::Artifact(format!(
            "unsupported model format version {}",
            model_file.format_version
        )));
    }
    if vectorizer_file.format_version != FORMAT_VERSION {
        return Err(SpamError::Artifact(format!(
            "unsupported vectorizer format version {}",
            vectorizer_file.format_version
        )));
    }
    if model_file.weights.len() != vectorizer_file.vocabulary.len() {
        return Err(SpamError::Artifact(format!(
            "model has {} weights but vectorizer has {} tokens; \
             the artifacts are not from the same training run",
            model_file.weights.len(),
            vectorizer_file.vocabulary.len()
        )));
    }

    let model = LogisticRegression::from_parts(model_file.weights, model_file.bias);
    let vectorizer = CountVectorizer::from_vocabulary(vectorizer_file.vocabulary);
    Ok((model, vectorizer))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string(value)?;
    std::fs::write(path, json)?;
    Ok(())
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SpamError::ArtifactMissing(path.display().to_string())
        } else {
            SpamError::Io(e)
        }
    })?;

    serde_json::from_str(&content)
        .map_err(|e| SpamError::Artifact(format!("{}: {e}", path.display())))
}
