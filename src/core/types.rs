// src/core/types.rs
use serde::Deserialize;
use std::fmt;

/// A single reported symptom. Matching is exact string equality; the
/// built-in tables use lowercase, spaced names (e.g. "sore throat").
pub type Symptom = String;

/// The request payload accepted at the process boundary:
/// `{"symptoms": ["fever", "cough"]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    pub symptoms: Vec<Symptom>,
}

/// The outcome of a prediction. The two message variants are successful
/// results, not errors: an unknown combination is a valid answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prediction {
    Diagnosis(String),
    NoSymptomsSelected,
    UnknownCombination,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prediction::Diagnosis(disease) => f.write_str(disease),
            Prediction::NoSymptomsSelected => f.write_str("Please select at least one symptom"),
            Prediction::UnknownCombination => f.write_str("Unknown combination of symptoms"),
        }
    }
}
