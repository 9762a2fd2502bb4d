use predictor_core::error::RequestError;
use predictor_core::{PredictRequest, PredictorEngine};
use std::env;
use std::process;

fn run(raw: Option<String>) -> Result<String, RequestError> {
    let raw = raw.ok_or(RequestError::MissingArgument)?;
    let request: PredictRequest = serde_json::from_str(&raw)?;
    let engine = PredictorEngine::builtin();
    Ok(engine.predict(&request.symptoms).to_string())
}

fn main() {
    match run(env::args().nth(1)) {
        Ok(prediction) => println!("{}", prediction),
        Err(e) => {
            eprintln!("Error processing input: {}", e);
            process::exit(1);
        }
    }
}
