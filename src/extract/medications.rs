//! Medication extraction: cue word, drug name, dosage, optional frequency.
//!
//! A single compound pattern, best-effort by design: multi-word drug names,
//! names containing digits, and medications listed without a cue phrase
//! ("medication", "prescribed", ...) are not captured. That limitation is
//! part of the contract, not a bug to patch silently.

use std::sync::LazyLock;

use regex::Regex;

use super::compile;
use super::types::Medication;

/// Cue word, alphabetic name, amount (decimal allowed), alphabetic unit,
/// optional frequency. The frequency alternation is ordered: in
/// "once daily" the capture is "once", not "daily".
static MEDICATION: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:medication|meds|prescribed|taking)[\s:]*([A-Za-z]+)\s+(\d+\.?\d*)\s?([A-Za-z]+)(?:\s+(once|twice|three\s+times|daily|every\s+day|weekly|monthly|as\s+needed|PRN|q\d+h))?",
    )
});

/// Scan `text` for medication mentions, in document order. Duplicates are
/// kept; the caller decides whether repetition is meaningful.
pub fn extract_medications(text: &str) -> Vec<Medication> {
    MEDICATION
        .captures_iter(text)
        .map(|caps| Medication {
            name: caps[1].to_string(),
            dosage: format!("{} {}", &caps[2], &caps[3]),
            frequency: caps
                .get(4)
                .map(|m| m.as_str().trim())
                .filter(|f| !f.is_empty())
                .map(str::to_string),
        })
        .collect()
}
