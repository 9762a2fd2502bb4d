use crate::core::probability::{builtin_probabilities, ProbabilityTable};
use crate::core::rules::{builtin_rules, canonical_key, RuleTable};
use crate::core::types::{Prediction, Symptom};
use crate::persistence::load_from_disk;
use std::path::Path;

/// The symptom matcher: two immutable tables and one pure operation.
/// Nothing here mutates after construction, so a shared engine may be
/// called from any number of threads without locking.
pub struct PredictorEngine {
    rules: RuleTable,
    probabilities: ProbabilityTable,
}

impl PredictorEngine {
    /// Builds the engine from the embedded tables. The embedded data is
    /// known-valid; a duplicate here is a defect in the constants, not a
    /// runtime condition.
    pub fn builtin() -> Self {
        let rules = RuleTable::from_entries(builtin_rules())
            .expect("built-in rule table contains duplicate keys");
        let probabilities = ProbabilityTable::from_entries(builtin_probabilities())
            .expect("built-in probability table contains duplicate entries");
        Self::from_tables(rules, probabilities)
    }

    pub fn from_tables(rules: RuleTable, probabilities: ProbabilityTable) -> Self {
        Self {
            rules,
            probabilities,
        }
    }

    /// Loads a persisted model, falling back to the built-in tables when
    /// the file is absent or unreadable.
    pub fn from_file_or_builtin(path: &Path) -> Self {
        load_from_disk(path).unwrap_or_else(|_| Self::builtin())
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn probabilities(&self) -> &ProbabilityTable {
        &self.probabilities
    }

    /// Maps reported symptoms to a diagnosis. First matching step wins:
    ///
    /// 1. No symptoms reported: ask for at least one.
    /// 2. Exact lookup of the canonical key (sorted, comma-joined,
    ///    duplicates kept). Stored keys are verbatim and not all sorted, so
    ///    an input can miss here and still hit the same entry in step 3.
    /// 3. First rule, in insertion order, whose symptom set contains every
    ///    reported symptom.
    /// 4. For a single reported symptom, the highest-weighted candidate
    ///    from its probability distribution.
    /// 5. Unknown combination.
    pub fn predict(&self, symptoms: &[Symptom]) -> Prediction {
        if symptoms.is_empty() {
            return Prediction::NoSymptomsSelected;
        }

        if let Some(diagnosis) = self.rules.get(&canonical_key(symptoms)) {
            return Prediction::Diagnosis(diagnosis.to_owned());
        }

        if let Some(diagnosis) = self.rules.first_superset_match(symptoms) {
            return Prediction::Diagnosis(diagnosis.to_owned());
        }

        if let [symptom] = symptoms {
            if let Some(disease) = self.probabilities.most_likely(symptom) {
                return Prediction::Diagnosis(disease.to_owned());
            }
        }

        Prediction::UnknownCombination
    }
}
