use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpamError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dataset row at line {line}: expected 2 tab-separated columns, found {found}")]
    DataFormat { line: usize, found: usize },

    #[error("unknown label at line {line}: {label:?}")]
    UnknownLabel { line: usize, label: String },

    #[error("model artifact missing: {0}")]
    ArtifactMissing(String),

    #[error("invalid artifact: {0}")]
    Artifact(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("training error: {0}")]
    Training(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpamError>;
