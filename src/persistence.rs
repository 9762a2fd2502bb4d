// File: src/persistence.rs
use crate::core::engine::PredictorEngine;
use crate::core::probability::ProbabilityTable;
use crate::core::rules::RuleTable;
use crate::error::ModelError;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// The serialized shape of the model: both tables as plain ordered pairs,
/// so insertion order survives the round trip. The byte format is not a
/// stability guarantee; loading reconstructs the tables through the same
/// validated constructors used for the built-ins.
#[derive(serde::Serialize, serde::Deserialize)]
struct SerializableModel {
    rules: Vec<(String, String)>,
    probabilities: Vec<(String, Vec<(String, f64)>)>,
}

/// Default location of the persisted model artifact.
pub fn default_model_path() -> PathBuf {
    let mut path = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    path.push("fitpulse-predictor");
    path.push("disease_model.bin");
    path
}

pub fn save_to_disk(engine: &PredictorEngine, path: &Path) -> Result<(), ModelError> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let model = SerializableModel {
        rules: engine
            .rules()
            .entries()
            .map(|(key, diagnosis)| (key.to_owned(), diagnosis.to_owned()))
            .collect(),
        probabilities: engine
            .probabilities()
            .entries()
            .map(|(symptom, candidates)| (symptom.to_owned(), candidates.to_vec()))
            .collect(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let writer = BufWriter::new(&temp_file);
    bincode::serialize_into(writer, &model)?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<PredictorEngine, ModelError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let model: SerializableModel = bincode::deserialize_from(reader)?;

    let rules = RuleTable::from_entries(model.rules)?;
    let probabilities = ProbabilityTable::from_entries(model.probabilities)?;
    Ok(PredictorEngine::from_tables(rules, probabilities))
}
