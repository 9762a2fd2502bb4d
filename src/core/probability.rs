use crate::error::ModelError;
use std::collections::{HashMap, HashSet};

/// Weighted candidate diagnoses for one symptom, in authored order.
struct CandidateRow {
    symptom: String,
    candidates: Vec<(String, f64)>,
}

/// Per-symptom candidate distributions used as the last-resort guess for a
/// lone symptom that matched no rule. Weights are relative likelihoods and
/// need not sum to 1.
pub struct ProbabilityTable {
    rows: Vec<CandidateRow>,
    index: HashMap<String, usize>,
}

impl ProbabilityTable {
    /// Builds the table from `(symptom, candidates)` pairs, rejecting
    /// duplicate symptoms and duplicate diseases within one symptom.
    pub fn from_entries<I>(entries: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (String, Vec<(String, f64)>)>,
    {
        let mut table = Self {
            rows: Vec::new(),
            index: HashMap::new(),
        };
        for (symptom, candidates) in entries {
            if table.index.contains_key(&symptom) {
                return Err(ModelError::DuplicateSymptom(symptom));
            }
            let mut seen = HashSet::new();
            for (disease, _) in &candidates {
                if !seen.insert(disease.as_str()) {
                    return Err(ModelError::DuplicateCandidate {
                        symptom,
                        disease: disease.clone(),
                    });
                }
            }
            table.index.insert(symptom.clone(), table.rows.len());
            table.rows.push(CandidateRow {
                symptom,
                candidates,
            });
        }
        Ok(table)
    }

    /// The highest-weighted candidate for a symptom. On ties the earliest
    /// candidate in authored order wins (max-reduction, first occurrence
    /// kept).
    pub fn most_likely(&self, symptom: &str) -> Option<&str> {
        let row = &self.rows[*self.index.get(symptom)?];
        let mut best: Option<(&str, f64)> = None;
        for (disease, weight) in &row.candidates {
            match best {
                Some((_, top)) if *weight <= top => {}
                _ => best = Some((disease, *weight)),
            }
        }
        best.map(|(disease, _)| disease)
    }

    /// Symptoms with a distribution, in authored order.
    pub fn symptoms(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.symptom.as_str())
    }

    /// Entries as `(symptom, candidates)` pairs, in authored order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[(String, f64)])> {
        self.rows
            .iter()
            .map(|row| (row.symptom.as_str(), row.candidates.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Per-symptom candidate weights, authored order preserved.
const BUILTIN_PROBABILITIES: &[(&str, &[(&str, f64)])] = &[
    (
        "fever",
        &[
            ("Common Cold", 0.6),
            ("Flu", 0.2),
            ("Viral Infection", 0.2),
        ],
    ),
    (
        "cough",
        &[("Bronchitis", 0.5), ("Flu", 0.3), ("COVID-19", 0.2)],
    ),
    (
        "sore throat",
        &[
            ("Strep Throat", 0.4),
            ("Tonsillitis", 0.3),
            ("Viral Infection", 0.3),
        ],
    ),
    (
        "headache",
        &[
            ("Migraine", 0.4),
            ("Sinusitis", 0.3),
            ("Viral Infection", 0.3),
        ],
    ),
    (
        "fatigue",
        &[
            ("Anemia", 0.4),
            ("Viral Infection", 0.3),
            ("Chronic Fatigue", 0.3),
        ],
    ),
    (
        "nausea",
        &[
            ("Gastritis", 0.4),
            ("Food Poisoning", 0.3),
            ("Viral Infection", 0.3),
        ],
    ),
    (
        "dizziness",
        &[("Vertigo", 0.5), ("Migraine", 0.3), ("Anemia", 0.2)],
    ),
    (
        "rash",
        &[
            ("Allergic Reaction", 0.5),
            ("Contact Dermatitis", 0.3),
            ("Viral Infection", 0.2),
        ],
    ),
    (
        "muscle pain",
        &[
            ("Fibromyalgia", 0.4),
            ("Viral Infection", 0.3),
            ("Flu", 0.3),
        ],
    ),
    (
        "breathing difficulty",
        &[("Asthma", 0.5), ("Bronchitis", 0.3), ("Pneumonia", 0.2)],
    ),
    (
        "chest pain",
        &[
            ("Angina", 0.5),
            ("Heart Condition", 0.3),
            ("Anxiety", 0.2),
        ],
    ),
    (
        "joint pain",
        &[
            ("Arthritis", 0.5),
            ("Rheumatoid Arthritis", 0.3),
            ("Viral Infection", 0.2),
        ],
    ),
    (
        "abdominal pain",
        &[
            ("Gastritis", 0.5),
            ("Gastroenteritis", 0.3),
            ("Food Poisoning", 0.2),
        ],
    ),
    (
        "blurred vision",
        &[("Migraine", 0.5), ("Eye Strain", 0.3), ("Anxiety", 0.2)],
    ),
    (
        "insomnia",
        &[("Anxiety", 0.5), ("Stress", 0.3), ("Depression", 0.2)],
    ),
    (
        "loss of appetite",
        &[
            ("Gastritis", 0.5),
            ("Anxiety", 0.3),
            ("Viral Infection", 0.2),
        ],
    ),
    (
        "weakness",
        &[
            ("Anemia", 0.5),
            ("Viral Infection", 0.3),
            ("Chronic Fatigue", 0.2),
        ],
    ),
    (
        "chills",
        &[
            ("Common Cold", 0.5),
            ("Flu", 0.3),
            ("Viral Infection", 0.2),
        ],
    ),
    (
        "sweating",
        &[
            ("Anxiety", 0.5),
            ("Viral Infection", 0.3),
            ("Heart Condition", 0.2),
        ],
    ),
    (
        "muscle cramps",
        &[
            ("Dehydration", 0.6),
            ("Muscle Fatigue", 0.3),
            ("Electrolyte Imbalance", 0.1),
        ],
    ),
    (
        "joint stiffness",
        &[("DOMS", 0.5), ("Arthritis", 0.3), ("Inactivity", 0.2)],
    ),
    (
        "lower back pain",
        &[
            ("Muscle Strain", 0.6),
            ("Herniated Disc", 0.2),
            ("Poor Posture", 0.2),
        ],
    ),
    (
        "shin splints",
        &[
            ("Overuse Injury", 0.7),
            ("Stress Fracture", 0.2),
            ("Poor Footwear", 0.1),
        ],
    ),
    (
        "dehydration",
        &[
            ("Heat Exhaustion", 0.5),
            ("Viral Infection", 0.3),
            ("Diabetes", 0.2),
        ],
    ),
    (
        "excessive fatigue",
        &[
            ("Overtraining", 0.5),
            ("Anemia", 0.3),
            ("Viral Infection", 0.2),
        ],
    ),
    (
        "rotator cuff pain",
        &[("Tendinitis", 0.6), ("Tear", 0.3), ("Bursitis", 0.1)],
    ),
];

pub(crate) fn builtin_probabilities() -> impl Iterator<Item = (String, Vec<(String, f64)>)> {
    BUILTIN_PROBABILITIES.iter().map(|&(symptom, candidates)| {
        (
            symptom.to_owned(),
            candidates
                .iter()
                .map(|&(disease, weight)| (disease.to_owned(), weight))
                .collect(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_probabilities_load_without_duplicates() {
        let table = ProbabilityTable::from_entries(builtin_probabilities()).unwrap();
        assert_eq!(table.len(), 26);
    }

    #[test]
    fn most_likely_picks_the_highest_weight() {
        let table = ProbabilityTable::from_entries(builtin_probabilities()).unwrap();
        assert_eq!(table.most_likely("shin splints"), Some("Overuse Injury"));
        assert_eq!(table.most_likely("rotator cuff pain"), Some("Tendinitis"));
    }

    #[test]
    fn ties_prefer_the_earliest_candidate() {
        let entries = vec![(
            "night sweats".to_owned(),
            vec![
                ("Tuberculosis".to_owned(), 0.4),
                ("Lymphoma".to_owned(), 0.4),
                ("Menopause".to_owned(), 0.2),
            ],
        )];
        let table = ProbabilityTable::from_entries(entries).unwrap();
        assert_eq!(table.most_likely("night sweats"), Some("Tuberculosis"));
    }

    #[test]
    fn unknown_symptom_has_no_candidate() {
        let table = ProbabilityTable::from_entries(builtin_probabilities()).unwrap();
        assert_eq!(table.most_likely("unobtainium_symptom"), None);
    }

    #[test]
    fn duplicate_symptoms_are_rejected() {
        let entries = vec![
            ("fever".to_owned(), vec![("Flu".to_owned(), 0.5)]),
            ("fever".to_owned(), vec![("Common Cold".to_owned(), 0.5)]),
        ];
        assert!(matches!(
            ProbabilityTable::from_entries(entries),
            Err(ModelError::DuplicateSymptom(_))
        ));
    }

    #[test]
    fn duplicate_candidates_are_rejected() {
        let entries = vec![(
            "fever".to_owned(),
            vec![("Flu".to_owned(), 0.5), ("Flu".to_owned(), 0.3)],
        )];
        assert!(matches!(
            ProbabilityTable::from_entries(entries),
            Err(ModelError::DuplicateCandidate { .. })
        ));
    }
}
