// src/error.rs
use thiserror::Error;

/// Errors raised while constructing or persisting the prediction model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("duplicate rule key: {0}")]
    DuplicateRule(String),

    #[error("duplicate probability entry for symptom: {0}")]
    DuplicateSymptom(String),

    #[error("duplicate candidate '{disease}' for symptom '{symptom}'")]
    DuplicateCandidate { symptom: String, disease: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("codec error: {0}")]
    Codec(#[from] bincode::Error),
}

/// Errors raised at the command-line boundary, before any prediction runs.
/// A prediction itself cannot fail: the fallback messages are ordinary
/// results, not errors.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("missing request argument")]
    MissingArgument,

    #[error("{0}")]
    InvalidJson(#[from] serde_json::Error),
}
