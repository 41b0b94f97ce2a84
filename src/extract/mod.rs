//! Rule-based extraction of structured medical facts from clinical text.
//!
//! Six independent extractors run over the same input and
//! [`extract_all_medical_info`] composes them into one [`MedicalRecord`].
//! Every extractor is a pure function of the text: no shared state, no I/O,
//! no failure mode. Malformed input degrades to empty fields, never to an
//! error or a panic.

pub mod types;
pub mod vitals;
pub mod medications;
pub mod phrases;
pub mod labs;

pub use types::{LabResults, LabTest, MedicalRecord, Medication, VitalSigns};
pub use vitals::extract_measurements;
pub use medications::extract_medications;
pub use phrases::{extract_allergies, extract_diagnoses, extract_procedures};
pub use labs::extract_lab_results;

use regex::Regex;

/// Compile a hand-written extraction pattern. The pattern tables are static
/// and reviewed, so a compile failure is a programming error, not an input
/// error.
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("invalid extraction pattern")
}

/// Run all six extractors over `text` and assemble the results.
///
/// Total over every string input, including empty: each field of the
/// returned record defaults to empty rather than being absent. The
/// sub-extractors are independent, so invocation order never affects the
/// result.
pub fn extract_all_medical_info(text: &str) -> MedicalRecord {
    let record = MedicalRecord {
        measurements: vitals::extract_measurements(text),
        medications: medications::extract_medications(text),
        diagnoses: phrases::extract_diagnoses(text),
        allergies: phrases::extract_allergies(text),
        procedures: phrases::extract_procedures(text),
        lab_results: labs::extract_lab_results(text),
    };

    tracing::debug!(
        medications = record.medications.len(),
        diagnoses = record.diagnoses.len(),
        allergies = record.allergies.len(),
        procedures = record.procedures.len(),
        lab_results = record.lab_results.len(),
        "medical extraction complete"
    );

    record
}
