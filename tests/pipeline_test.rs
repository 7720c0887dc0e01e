//! End-to-end training pipeline tests: determinism, artifact round trip,
//! and the toy free/hello scenario, all against temporary directories.

use spamdetect_rs::artifacts;
use spamdetect_rs::config::Config;
use spamdetect_rs::error::SpamError;
use spamdetect_rs::features::FeatureExtractor;
use spamdetect_rs::model::Classifier;
use spamdetect_rs::training;
use std::path::Path;

const TOY_DATASET: &str = "\
spam\tfree entry win a free prize now\n\
spam\tclaim your free reward free cash\n\
ham\thello how are you doing today\n\
ham\thello there see you at lunch\n";

/// Config with every path redirected into `dir`.
fn config_in(dir: &Path) -> Config {
    let mut config = Config::default();
    config.training.dataset_path = dir.join("dataset.tsv").display().to_string();
    config.training.log_path = dir.join("docs/notas.md").display().to_string();
    config.artifacts.model_path = dir.join("models/spam_model.json").display().to_string();
    config.artifacts.vectorizer_path = dir.join("models/vectorizer.json").display().to_string();
    config
}

#[test]
fn repeated_runs_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    std::fs::write(&config.training.dataset_path, TOY_DATASET).unwrap();

    let first = training::run(&config).unwrap();
    let second = training::run(&config).unwrap();

    assert_eq!(first.accuracy, second.accuracy);
    assert_eq!(first.confusion, second.confusion);
}

#[test]
fn trained_artifacts_separate_free_from_hello() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    std::fs::write(&config.training.dataset_path, TOY_DATASET).unwrap();

    training::run(&config).unwrap();

    let (model, vectorizer) = artifacts::load(
        &config.artifacts.model_path,
        &config.artifacts.vectorizer_path,
    )
    .unwrap();

    let spammy = model.predict(&vectorizer.transform_one("free free free"));
    let hammy = model.predict(&vectorizer.transform_one("hello there"));

    assert_eq!(spammy.as_str(), "spam");
    assert_eq!(hammy.as_str(), "ham");
}

#[test]
fn loaded_pair_reproduces_in_memory_predictions() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    std::fs::write(&config.training.dataset_path, TOY_DATASET).unwrap();
    training::run(&config).unwrap();

    let (model, vectorizer) = artifacts::load(
        &config.artifacts.model_path,
        &config.artifacts.vectorizer_path,
    )
    .unwrap();
    let (again_model, again_vectorizer) = artifacts::load(
        &config.artifacts.model_path,
        &config.artifacts.vectorizer_path,
    )
    .unwrap();

    for text in ["free prize", "hello lunch", "", "unrelated tokens only"] {
        let a = model.predict_proba(&vectorizer.transform_one(text));
        let b = again_model.predict_proba(&again_vectorizer.transform_one(text));
        assert_eq!(a, b, "prediction drifted for {text:?}");
    }
}

#[test]
fn every_run_appends_a_log_block() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    std::fs::write(&config.training.dataset_path, TOY_DATASET).unwrap();

    training::run(&config).unwrap();
    training::run(&config).unwrap();

    let log = std::fs::read_to_string(&config.training.log_path).unwrap();
    assert_eq!(log.matches("## Training run").count(), 2);
    assert!(log.contains("- Dataset: SMS Spam Collection"));
    assert!(log.contains("- Accuracy:"));
}

#[test]
fn malformed_dataset_row_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    std::fs::write(
        &config.training.dataset_path,
        "ham\thello\nspam only one column\n",
    )
    .unwrap();

    let err = training::run(&config).unwrap_err();
    assert!(matches!(err, SpamError::DataFormat { line: 2, found: 1 }));
}

#[test]
fn missing_artifacts_refuse_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let result = artifacts::load(
        &config.artifacts.model_path,
        &config.artifacts.vectorizer_path,
    );
    assert!(matches!(result, Err(SpamError::ArtifactMissing(_))));
}
