//! Free-text phrase extraction for diagnoses, allergies, and procedures.
//!
//! Clinical notes use inconsistent section headers, so each category runs a
//! small ordered set of overlapping label patterns over the full text and
//! concatenates every capture in pattern-declaration order. Recall is favored
//! over precision, and duplicates are deliberately not removed — downstream
//! consumers tolerate redundancy.

use std::sync::LazyLock;

use regex::Regex;

use super::compile;

/// "Diagnosis:", "diagnosed with", "Assessment:", "Impression:", "Condition:".
static DIAGNOSIS_LABELS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        compile(r"(?i)\bdiagnos(?:is|ed\s+with)[\s:]*([^.;,\n]+)"),
        compile(r"(?i)\bassessment[\s:]*([^.;,\n]+)"),
        compile(r"(?i)\bimpression[\s:]*([^.;,\n]+)"),
        compile(r"(?i)\bcondition[\s:]*([^.;,\n]+)"),
    ]
});

/// "Allergy:", "allergic to", "Adverse reaction:".
static ALLERGY_LABELS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        compile(r"(?i)\ballerg(?:y|ies|ic\s+to)[\s:]*([^.;,\n]+)"),
        compile(r"(?i)\badverse\s+reactions?[\s:]*([^.;,\n]+)"),
    ]
});

/// "Procedure:", "Surgery:", "Operation:".
static PROCEDURE_LABELS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        compile(r"(?i)\bprocedures?[\s:]*([^.;,\n]+)"),
        compile(r"(?i)\bsurgery[\s:]*([^.;,\n]+)"),
        compile(r"(?i)\boperation[\s:]*([^.;,\n]+)"),
    ]
});

pub fn extract_diagnoses(text: &str) -> Vec<String> {
    collect_labeled_phrases(text, &DIAGNOSIS_LABELS)
}

pub fn extract_allergies(text: &str) -> Vec<String> {
    collect_labeled_phrases(text, &ALLERGY_LABELS)
}

pub fn extract_procedures(text: &str) -> Vec<String> {
    collect_labeled_phrases(text, &PROCEDURE_LABELS)
}

/// Run every label pattern over the full text. Each capture runs from the
/// label to the next sentence delimiter (`.` `;` `,` or newline); captures
/// are trimmed and blank ones dropped.
fn collect_labeled_phrases(text: &str, labels: &[Regex]) -> Vec<String> {
    let mut phrases = Vec::new();
    for label in labels {
        for caps in label.captures_iter(text) {
            let phrase = caps[1].trim();
            if !phrase.is_empty() {
                phrases.push(phrase.to_string());
            }
        }
    }
    phrases
}

#[cfg(test)]
mod tests {
    use super::*;

    // =================================================================
    // DIAGNOSES
    // =================================================================

    #[test]
    fn diagnosis_label() {
        assert_eq!(extract_diagnoses("Diagnosis: influenza A."), vec!["influenza A"]);
    }

    #[test]
    fn diagnosed_with_phrase() {
        assert_eq!(
            extract_diagnoses("Patient was diagnosed with pneumonia; started antibiotics."),
            vec!["pneumonia"]
        );
    }

    #[test]
    fn multiple_triggers_concatenate_in_declaration_order() {
        let diagnoses = extract_diagnoses("Diagnosis: flu. Impression: viral infection.");
        assert_eq!(diagnoses, vec!["flu", "viral infection"]);
    }

    #[test]
    fn duplicates_preserved() {
        let diagnoses = extract_diagnoses("Diagnosis: flu. Condition: flu.");
        assert_eq!(diagnoses, vec!["flu", "flu"]);
    }

    #[test]
    fn capture_stops_at_delimiters() {
        let diagnoses = extract_diagnoses("Assessment: hypertension, well controlled");
        assert_eq!(diagnoses, vec!["hypertension"]);
    }

    #[test]
    fn blank_capture_dropped() {
        assert!(extract_diagnoses("Diagnosis:   .").is_empty());
    }

    // =================================================================
    // ALLERGIES
    // =================================================================

    #[test]
    fn allergies_plural_label() {
        assert_eq!(extract_allergies("Allergies: penicillin."), vec!["penicillin"]);
    }

    #[test]
    fn allergic_to_phrase() {
        assert_eq!(extract_allergies("allergic to shellfish\n"), vec!["shellfish"]);
    }

    #[test]
    fn adverse_reaction_label() {
        assert_eq!(
            extract_allergies("Adverse reactions: rash with sulfa drugs."),
            vec!["rash with sulfa drugs"]
        );
    }

    #[test]
    fn comma_separated_list_keeps_first_item_only() {
        // Captures stop at the first delimiter; list tails are not re-scanned.
        assert_eq!(extract_allergies("Allergies: latex, iodine"), vec!["latex"]);
    }

    // =================================================================
    // PROCEDURES
    // =================================================================

    #[test]
    fn procedure_label() {
        assert_eq!(
            extract_procedures("Procedure: laparoscopic appendectomy."),
            vec!["laparoscopic appendectomy"]
        );
    }

    #[test]
    fn surgery_and_operation_labels() {
        let procedures =
            extract_procedures("Surgery: knee replacement.\nOperation: cataract removal.");
        assert_eq!(procedures, vec!["knee replacement", "cataract removal"]);
    }

    #[test]
    fn nothing_found_is_empty() {
        assert!(extract_diagnoses("Patient is doing well.").is_empty());
        assert!(extract_allergies("Patient is doing well.").is_empty());
        assert!(extract_procedures("Patient is doing well.").is_empty());
    }
}
