//! medextract — rule-based extraction of structured medical facts from
//! unstructured clinical text (OCR output, pasted notes).
//!
//! The entry point most callers need is [`extract_all_medical_info`], which
//! returns a [`MedicalRecord`] with vitals, medications, diagnoses,
//! allergies, procedures, and lab values. The per-category extractors are
//! public for callers that only want one category. Extraction never fails:
//! text the rules cannot read produces empty fields, not errors.

pub mod config;
pub mod extract;

pub use extract::{
    extract_all_medical_info, extract_allergies, extract_diagnoses, extract_lab_results,
    extract_measurements, extract_medications, extract_procedures,
};
pub use extract::{LabResults, LabTest, MedicalRecord, Medication, VitalSigns};
