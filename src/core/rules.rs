// File: src/core/rules.rs
use crate::core::types::Symptom;
use crate::error::ModelError;
use std::collections::{HashMap, HashSet};

/// One rule: the literal comma-joined symptom key and its diagnosis.
/// The key's symptom set is split out once at construction so the subset
/// scan does not re-split on every call.
struct RuleEntry {
    key: String,
    symptoms: HashSet<String>,
    diagnosis: String,
}

/// The exact-combination rule table. Entries keep their insertion order,
/// which the subset scan depends on: the first matching entry wins. A hash
/// index over the literal keys serves the exact lookup.
pub struct RuleTable {
    entries: Vec<RuleEntry>,
    index: HashMap<String, usize>,
}

impl RuleTable {
    /// Builds a table from `(key, diagnosis)` pairs, rejecting duplicate
    /// keys. Keys are stored verbatim: several multi-symptom keys in the
    /// built-in data are not in sorted order, and that is part of the data.
    pub fn from_entries<I>(entries: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut table = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };
        for (key, diagnosis) in entries {
            if table.index.contains_key(&key) {
                return Err(ModelError::DuplicateRule(key));
            }
            let symptoms = key.split(',').map(str::to_owned).collect();
            table.index.insert(key.clone(), table.entries.len());
            table.entries.push(RuleEntry {
                key,
                symptoms,
                diagnosis,
            });
        }
        Ok(table)
    }

    /// Exact lookup by literal key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].diagnosis.as_str())
    }

    /// The first entry, in insertion order, whose symptom set contains every
    /// reported symptom. The input may be a partial list for a richer rule;
    /// duplicates in the input collapse through set membership.
    pub fn first_superset_match(&self, symptoms: &[Symptom]) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| symptoms.iter().all(|s| entry.symptoms.contains(s)))
            .map(|entry| entry.diagnosis.as_str())
    }

    /// Entries as `(key, diagnosis)` pairs, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|entry| (entry.key.as_str(), entry.diagnosis.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sorts the reported symptoms lexicographically and joins them with `,`.
/// Duplicates are kept: `["fever", "fever"]` maps to `"fever,fever"`.
pub fn canonical_key(symptoms: &[Symptom]) -> String {
    let mut sorted: Vec<&str> = symptoms.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.join(",")
}

/// The hand-authored rule set. Order is significant: the subset scan
/// returns the first matching entry. An older snapshot of these rules used
/// underscored symptom names ("sore_throat") and a slightly different
/// vocabulary; the two were never unified, so names here are kept verbatim
/// rather than normalized.
const BUILTIN_RULES: &[(&str, &str)] = &[
    // Single symptoms
    ("fever", "Common Cold"),
    ("cough", "Bronchitis"),
    ("sore throat", "Strep Throat"),
    ("headache", "Migraine"),
    ("fatigue", "Anemia"),
    ("nausea", "Gastritis"),
    ("dizziness", "Vertigo"),
    ("rash", "Allergic Reaction"),
    ("muscle pain", "Fibromyalgia"),
    ("breathing difficulty", "Asthma"),
    ("chest pain", "Angina"),
    ("joint pain", "Arthritis"),
    ("abdominal pain", "Gastritis"),
    ("blurred vision", "Migraine"),
    ("insomnia", "Anxiety"),
    ("loss of appetite", "Gastritis"),
    ("weakness", "Anemia"),
    ("chills", "Common Cold"),
    ("sweating", "Anxiety"),
    // Two symptoms
    ("fever,cough", "Flu"),
    ("fever,sore throat", "Tonsillitis"),
    ("fever,headache", "Viral Infection"),
    ("fever,fatigue", "Mononucleosis"),
    ("fever,rash", "Measles"),
    ("cough,sore throat", "Bronchitis"),
    ("cough,headache", "Sinus Infection"),
    ("cough,breathing difficulty", "Pneumonia"),
    ("sore throat,headache", "Sinusitis"),
    ("nausea,fatigue", "Food Poisoning"),
    ("dizziness,nausea", "Motion Sickness"),
    ("rash,itching", "Contact Dermatitis"),
    ("chest pain,breathing difficulty", "Heart Condition"),
    ("joint pain,fatigue", "Rheumatoid Arthritis"),
    ("abdominal pain,nausea", "Gastritis"),
    ("blurred vision,headache", "Migraine"),
    ("insomnia,fatigue", "Anxiety"),
    ("loss of appetite,nausea", "Gastritis"),
    ("weakness,fatigue", "Anemia"),
    ("chills,fever", "Flu"),
    ("sweating,anxiety", "Anxiety"),
    // Three symptoms
    ("fever,cough,sore throat", "Common Cold"),
    ("fever,cough,headache", "Influenza"),
    ("fever,sore throat,headache", "Tonsillitis"),
    ("fever,fatigue,headache", "Viral Meningitis"),
    ("fever,rash,headache", "Chickenpox"),
    ("cough,breathing difficulty,fatigue", "Chronic Bronchitis"),
    ("nausea,vomiting,fatigue", "Gastroenteritis"),
    ("dizziness,nausea,headache", "Migraine"),
    ("rash,itching,fever", "Allergic Reaction"),
    ("muscle pain,fatigue,headache", "Fibromyalgia"),
    ("chest pain,breathing difficulty,fatigue", "Heart Condition"),
    ("joint pain,fatigue,muscle pain", "Rheumatoid Arthritis"),
    ("abdominal pain,nausea,vomiting", "Gastroenteritis"),
    ("blurred vision,headache,nausea", "Migraine"),
    ("insomnia,fatigue,headache", "Anxiety"),
    ("loss of appetite,nausea,fatigue", "Gastritis"),
    ("weakness,fatigue,dizziness", "Anemia"),
    ("chills,fever,headache", "Flu"),
    ("sweating,anxiety,insomnia", "Anxiety"),
    // Four symptoms
    ("fever,cough,sore throat,headache", "Severe Viral Infection"),
    ("fever,cough,breathing difficulty,fatigue", "Pneumonia"),
    ("fever,rash,headache,muscle pain", "Dengue Fever"),
    ("nausea,vomiting,fatigue,dizziness", "Food Poisoning"),
    ("rash,itching,fever,headache", "Allergic Reaction"),
    ("chest pain,breathing difficulty,fatigue,dizziness", "Heart Condition"),
    ("joint pain,fatigue,muscle pain,insomnia", "Rheumatoid Arthritis"),
    ("abdominal pain,nausea,vomiting,fatigue", "Gastroenteritis"),
    ("blurred vision,headache,nausea,dizziness", "Migraine"),
    ("insomnia,fatigue,headache,muscle pain", "Anxiety"),
    ("loss of appetite,nausea,fatigue,weakness", "Gastritis"),
    ("weakness,fatigue,dizziness,headache", "Anemia"),
    ("chills,fever,headache,muscle pain", "Flu"),
    ("sweating,anxiety,insomnia,headache", "Anxiety"),
    // Five or more symptoms
    ("fever,cough,sore throat,headache,fatigue", "Severe Viral Infection"),
    ("fever,cough,breathing difficulty,fatigue,muscle pain", "Pneumonia"),
    ("fever,rash,headache,muscle pain,nausea", "Dengue Fever"),
    ("chest pain,breathing difficulty,fatigue,dizziness,nausea", "Heart Condition"),
    ("joint pain,fatigue,muscle pain,insomnia,headache", "Rheumatoid Arthritis"),
    ("abdominal pain,nausea,vomiting,fatigue,dizziness", "Gastroenteritis"),
    ("blurred vision,headache,nausea,dizziness,fatigue", "Migraine"),
    ("insomnia,fatigue,headache,muscle pain,anxiety", "Anxiety"),
    ("loss of appetite,nausea,fatigue,weakness,dizziness", "Gastritis"),
    ("weakness,fatigue,dizziness,headache,insomnia", "Anemia"),
    ("chills,fever,headache,muscle pain,fatigue", "Flu"),
    ("sweating,anxiety,insomnia,headache,fatigue", "Anxiety"),
    // Gym / workout related
    ("muscle cramps", "Dehydration / Electrolyte Imbalance"),
    ("joint stiffness", "Delayed Onset Muscle Soreness (DOMS)"),
    ("lower back pain", "Muscle Strain / Poor Form"),
    ("shin splints", "Medial Tibial Stress Syndrome"),
    ("dehydration", "Severe Dehydration"),
    ("excessive fatigue", "Overtraining Syndrome"),
    ("rotator cuff pain", "Rotator Cuff Tendinitis"),
    // Gym combinations
    ("muscle cramps,dehydration", "Heat Exhaustion"),
    ("muscle cramps,excessive fatigue", "Electrolyte Depletion"),
    ("joint stiffness,muscle pain", "DOMS"),
    ("lower back pain,muscle pain", "Lumbar Strain"),
    ("shin splints,muscle pain", "Overuse Injury"),
    ("rotator cuff pain,joint pain", "Shoulder Impingement"),
    ("excessive fatigue,weakness", "Overtraining"),
    ("dehydration,dizziness", "Heat Exhaustion"),
    ("muscle cramps,sweating", "Exercise-Induced Cramping"),
];

pub(crate) fn builtin_rules() -> impl Iterator<Item = (String, String)> {
    BUILTIN_RULES
        .iter()
        .map(|&(key, diagnosis)| (key.to_owned(), diagnosis.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn builtin_rules_load_without_duplicates() {
        let table = RuleTable::from_entries(builtin_rules()).unwrap();
        assert_eq!(table.len(), 101);
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let entries = vec![
            ("fever".to_owned(), "Common Cold".to_owned()),
            ("fever".to_owned(), "Flu".to_owned()),
        ];
        match RuleTable::from_entries(entries) {
            Err(ModelError::DuplicateRule(key)) => assert_eq!(key, "fever"),
            other => panic!("expected duplicate rule error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn keys_are_stored_verbatim_not_sorted() {
        let table = RuleTable::from_entries(builtin_rules()).unwrap();
        // The authored key is "fever,cough"; its sorted form is absent.
        assert_eq!(table.get("fever,cough"), Some("Flu"));
        assert_eq!(table.get("cough,fever"), None);
    }

    #[test]
    fn superset_scan_returns_the_first_entry_in_insertion_order() {
        let entries = vec![
            ("a,b".to_owned(), "First".to_owned()),
            ("a,b,c".to_owned(), "Second".to_owned()),
        ];
        let table = RuleTable::from_entries(entries).unwrap();
        assert_eq!(table.first_superset_match(&sym(&["b"])), Some("First"));
        assert_eq!(table.first_superset_match(&sym(&["c"])), Some("Second"));
        assert_eq!(table.first_superset_match(&sym(&["d"])), None);
    }

    #[test]
    fn canonical_key_sorts_and_keeps_duplicates() {
        assert_eq!(canonical_key(&sym(&["fever", "cough"])), "cough,fever");
        assert_eq!(canonical_key(&sym(&["fever", "fever"])), "fever,fever");
        assert_eq!(canonical_key(&sym(&["fever"])), "fever");
    }
}
