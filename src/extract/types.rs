use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Vital-sign readings pulled from one document.
///
/// A field is `Some` only when its pattern fired; absence means "not found",
/// never a zero sentinel. Absent fields are omitted from serialized output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VitalSigns {
    /// Kept as one "systolic/diastolic" string, not two numeric fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_f: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respiratory_rate: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_glucose: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oxygen_saturation: Option<u32>,
}

impl VitalSigns {
    /// True when no vital-sign pattern fired.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One medication mention, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    /// "<amount> <unit>", e.g. "81 mg".
    pub dosage: String,
    /// Frequency phrase as written ("once", "PRN", "q8h"); `None` when the
    /// mention carried no recognized frequency, never an empty string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
}

/// Lab tests the extractor knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabTest {
    Hemoglobin,
    Wbc,
    Rbc,
    Platelets,
    Cholesterol,
    Hdl,
    Ldl,
    Triglycerides,
    A1c,
    Creatinine,
    Bun,
    Alt,
    Ast,
}

/// A key is present only when its pattern matched and the capture parsed as
/// a number. BTreeMap keeps serialized key order deterministic.
pub type LabResults = BTreeMap<LabTest, f64>;

/// Everything extracted from a single document.
///
/// All six fields are always present; "nothing found" is an empty field,
/// never a missing key. Built fresh on every extraction call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub measurements: VitalSigns,
    pub medications: Vec<Medication>,
    pub diagnoses: Vec<String>,
    pub allergies: Vec<String>,
    pub procedures: Vec<String>,
    pub lab_results: LabResults,
}

impl MedicalRecord {
    /// True when no extractor found anything. Callers surface this as
    /// "no data found", not as an error.
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
            && self.medications.is_empty()
            && self.diagnoses.is_empty()
            && self.allergies.is_empty()
            && self.procedures.is_empty()
            && self.lab_results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_serializes_all_six_fields() {
        let json = serde_json::to_value(MedicalRecord::default()).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "measurements",
            "medications",
            "diagnoses",
            "allergies",
            "procedures",
            "lab_results",
        ] {
            assert!(obj.contains_key(key), "missing top-level key: {key}");
        }
    }

    #[test]
    fn absent_vitals_omitted_from_json() {
        let vitals = VitalSigns {
            heart_rate: Some(72),
            ..Default::default()
        };
        let json = serde_json::to_value(&vitals).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["heart_rate"], 72);
    }

    #[test]
    fn populated_record_round_trips_losslessly() {
        let mut lab_results = LabResults::new();
        lab_results.insert(LabTest::Hemoglobin, 13.5);
        lab_results.insert(LabTest::A1c, 7.2);

        let record = MedicalRecord {
            measurements: VitalSigns {
                blood_pressure: Some("120/80".to_string()),
                temperature_f: Some(98.6),
                ..Default::default()
            },
            medications: vec![Medication {
                name: "Aspirin".to_string(),
                dosage: "81 mg".to_string(),
                frequency: Some("once".to_string()),
            }],
            diagnoses: vec!["flu".to_string()],
            allergies: vec!["penicillin".to_string()],
            procedures: vec!["appendectomy".to_string()],
            lab_results,
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: MedicalRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn lab_test_keys_serialize_snake_case() {
        let mut lab_results = LabResults::new();
        lab_results.insert(LabTest::Wbc, 7.5);
        let json = serde_json::to_value(&lab_results).unwrap();
        assert_eq!(json.as_object().unwrap()["wbc"], 7.5);
    }

    #[test]
    fn is_empty_reflects_contents() {
        assert!(MedicalRecord::default().is_empty());

        let record = MedicalRecord {
            diagnoses: vec!["flu".to_string()],
            ..Default::default()
        };
        assert!(!record.is_empty());
    }
}
