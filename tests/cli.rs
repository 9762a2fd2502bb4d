// Process-level contract of the `predict` binary: one JSON argument in,
// the diagnosis on stdout, input failures on stderr with exit status 1.
use std::process::{Command, Output};

fn predict(args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_predict"));
    cmd.args(args);
    cmd.output().expect("failed to spawn predict binary")
}

fn stdout_line(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_owned()
}

fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn valid_request_prints_the_diagnosis() {
    let output = predict(&[r#"{"symptoms": ["fever", "cough"]}"#]);
    assert!(output.status.success());
    assert_eq!(stdout_line(&output), "Flu");
}

#[test]
fn empty_symptom_list_is_a_successful_result() {
    let output = predict(&[r#"{"symptoms": []}"#]);
    assert!(output.status.success());
    assert_eq!(stdout_line(&output), "Please select at least one symptom");
}

#[test]
fn unknown_combination_is_a_successful_result() {
    let output = predict(&[r#"{"symptoms": ["unobtainium_symptom"]}"#]);
    assert!(output.status.success());
    assert_eq!(stdout_line(&output), "Unknown combination of symptoms");
}

#[test]
fn invalid_json_fails_with_status_one() {
    let output = predict(&["{not json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_text(&output).contains("Error processing input"));
    assert!(stdout_line(&output).is_empty());
}

#[test]
fn missing_symptoms_field_fails_with_status_one() {
    let output = predict(&[r#"{"signs": ["fever"]}"#]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_text(&output).contains("Error processing input"));
}

#[test]
fn missing_argument_fails_with_status_one() {
    let output = predict(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_text(&output).contains("Error processing input"));
}
