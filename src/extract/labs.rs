//! Named numeric lab values: CBC counts, lipid panel, A1C, renal and liver
//! markers.

use std::sync::LazyLock;

use regex::Regex;

use super::compile;
use super::types::{LabResults, LabTest};

/// Cue pattern per lab test. First match per test wins. Short abbreviations
/// (HDL, ALT, ...) are boundary-anchored on both sides so they cannot match
/// inside an unrelated word.
static LAB_PATTERNS: LazyLock<Vec<(LabTest, Regex)>> = LazyLock::new(|| {
    vec![
        (LabTest::Hemoglobin, compile(r"(?i)\bhemoglobin[\s:]*(\d+\.?\d*)")),
        (LabTest::Wbc, compile(r"(?i)\b(?:WBC|white\s+blood\s+cell)[\s:]*(\d+\.?\d*)")),
        (LabTest::Rbc, compile(r"(?i)\b(?:RBC|red\s+blood\s+cell)[\s:]*(\d+\.?\d*)")),
        (LabTest::Platelets, compile(r"(?i)\bplatelets?[\s:]*(\d+)")),
        (LabTest::Cholesterol, compile(r"(?i)\b(?:total\s+)?cholesterol[\s:]*(\d+)")),
        (LabTest::Hdl, compile(r"(?i)\bHDL\b[\s:]*(\d+)")),
        (LabTest::Ldl, compile(r"(?i)\bLDL\b[\s:]*(\d+)")),
        (LabTest::Triglycerides, compile(r"(?i)\btriglycerides[\s:]*(\d+)")),
        (LabTest::A1c, compile(r"(?i)\b(?:A1C|HbA1c)[\s:]*(\d+\.?\d*)")),
        (LabTest::Creatinine, compile(r"(?i)\bcreatinine[\s:]*(\d+\.?\d*)")),
        (LabTest::Bun, compile(r"(?i)\b(?:BUN\b|blood\s+urea\s+nitrogen)[\s:]*(\d+)")),
        (LabTest::Alt, compile(r"(?i)\bALT\b[\s:]*(\d+)")),
        (LabTest::Ast, compile(r"(?i)\bAST\b[\s:]*(\d+)")),
    ]
});

/// Scan `text` for known lab values.
///
/// A key is stored only when its cue matched and the capture parsed as a
/// float. A capture that fails to parse is skipped, never surfaced as an
/// error; the numeric sub-patterns are digit-only, so the guard exists for
/// future pattern edits rather than for inputs seen today.
pub fn extract_lab_results(text: &str) -> LabResults {
    let mut results = LabResults::new();

    for (test, pattern) in LAB_PATTERNS.iter() {
        let Some(caps) = pattern.captures(text) else {
            continue;
        };
        match caps[1].parse::<f64>() {
            Ok(value) => {
                results.insert(*test, value);
            }
            Err(_) => {
                tracing::debug!(test = ?test, raw = &caps[1], "lab value failed numeric parse, skipped");
            }
        }
    }

    results
}
