use predictor_core::persistence::{default_model_path, save_to_disk};
use predictor_core::PredictorEngine;
use std::env;
use std::path::PathBuf;
use std::process;

fn main() {
    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_model_path);

    let engine = PredictorEngine::builtin();
    match save_to_disk(&engine, &path) {
        Ok(()) => println!(
            "Model written to '{}' ({} rules, {} symptom distributions)",
            path.display(),
            engine.rules().len(),
            engine.probabilities().len()
        ),
        Err(e) => {
            eprintln!("[ERROR] Could not write model: {}", e);
            process::exit(1);
        }
    }
}
