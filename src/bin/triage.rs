use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use predictor_core::persistence::default_model_path;
use predictor_core::{Prediction, PredictorEngine};
use std::io::{stdin, stdout, Write};

fn main() {
    let engine = PredictorEngine::from_file_or_builtin(&default_model_path());
    let vocabulary: Vec<String> = engine
        .probabilities()
        .symptoms()
        .map(str::to_owned)
        .collect();

    let mut selected: Vec<String> = Vec::new();
    let mut last_prediction: Option<Prediction> = None;

    loop {
        print_ui(&vocabulary, &selected, last_prediction.as_ref());

        let mut input = String::new();
        if stdin().read_line(&mut input).is_err() {
            break;
        }
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            "clear" => {
                selected.clear();
                last_prediction = None;
            }
            "" => {
                // Enter key - predict from the current selection
                last_prediction = Some(engine.predict(&selected));
            }
            s if s.starts_with(':') && s.len() > 1 => {
                // Toggle by number: ':1', ':2' etc
                if let Ok(n) = s[1..].parse::<usize>() {
                    if n > 0 && n <= vocabulary.len() {
                        toggle(&mut selected, &vocabulary[n - 1]);
                    }
                }
            }
            s => toggle(&mut selected, s),
        }
    }
}

fn toggle(selected: &mut Vec<String>, symptom: &str) {
    if let Some(pos) = selected.iter().position(|s| s == symptom) {
        selected.remove(pos);
    } else {
        selected.push(symptom.to_owned());
    }
}

fn print_ui(vocabulary: &[String], selected: &[String], prediction: Option<&Prediction>) {
    let mut out = stdout();
    let _ = execute!(out, Clear(ClearType::All), MoveTo(0, 0));

    println!("{}", "FitPulse Symptom Triage".bold().cyan());
    println!("---------------------------------------------------------------");
    println!("Toggle with ':1', ':2' or by typing a symptom name (free text");
    println!("works for symptoms not listed). [Enter] predicts, 'clear'");
    println!("resets the selection, 'exit' quits.\n");

    for (i, symptom) in vocabulary.iter().enumerate() {
        let marker = if selected.contains(symptom) {
            "[x]".green()
        } else {
            "[ ]".dim()
        };
        println!("  :{:<2} {} {}", i + 1, marker, symptom);
    }

    println!("\nSelected: {:?}", selected);
    if let Some(prediction) = prediction {
        println!("Prediction -> {}", prediction.to_string().bold().yellow());
    }
    print!("\n> ");
    let _ = out.flush();
}
