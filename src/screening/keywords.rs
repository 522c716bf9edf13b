//! Free-text symptom detection.
//!
//! Deliberately not NLP: case-insensitive substring containment against a
//! static trigger table. No tokenization, no stemming, no negation handling.
//! Partial-word hits ("swallowing" for "swallow", "painter" for "pain") are
//! an accepted limitation of the containment scan.

use crate::models::enums::SymptomId;
use crate::models::symptom::SymptomState;

/// Trigger substrings per symptom. Only these three symptoms are detectable
/// from free text; the rest are set through the questionnaire widgets.
const KEYWORD_TABLE: &[(SymptomId, &[&str])] = &[
    (SymptomId::Dysphagia, &["swallow", "stuck", "throat", "blocked"]),
    (SymptomId::WeightLoss, &["weight", "kilos", "thinner", "appetite"]),
    (SymptomId::ChestPain, &["chest", "thorax", "pain", "burning"]),
];

/// Scan `text` for symptom triggers. Every matched symptom is written into
/// `state` with the fixed present indicator; the matched ids are returned in
/// table order for user feedback. Empty or whitespace-only text matches
/// nothing, and unmatched symptoms are left untouched.
pub fn detect_symptoms(text: &str, state: &mut SymptomState) -> Vec<SymptomId> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let mut detected = Vec::new();
    for (symptom, triggers) in KEYWORD_TABLE {
        if triggers.iter().any(|t| lowered.contains(t)) {
            state.mark_present(*symptom);
            detected.push(*symptom);
        }
    }
    detected
}
