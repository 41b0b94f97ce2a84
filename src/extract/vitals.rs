//! Vital-sign extraction: blood pressure, temperature, heart rate,
//! respiratory rate, blood glucose, oxygen saturation.
//!
//! One pattern family per vital, first match wins. Repeated readings after
//! the first are ignored; callers that need the full series must segment
//! the text before calling in.

use std::sync::LazyLock;

use regex::Regex;

use super::compile;
use super::types::VitalSigns;

/// e.g. "BP: 120/80", "blood pressure 120/80 mmHg".
static BLOOD_PRESSURE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:BP|blood\s+pressure)[\s:]*(\d{2,3})/(\d{2,3})(?:\s*mmHg)?")
});

/// e.g. "Temp: 98.6F", "temperature 101.3 °F". Unit token selects the key;
/// a reading without a recognized unit is not a temperature match.
static TEMPERATURE_F: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:temp|temperature)[\s:]*(\d{2,3}(?:\.\d)?)\s*(?:F|°F|fahrenheit)")
});

/// e.g. "Temp: 37.5C", "temperature 38.5 °C".
static TEMPERATURE_C: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:temp|temperature)[\s:]*(\d{2,3}(?:\.\d)?)\s*(?:C|°C|celsius)")
});

/// e.g. "HR: 72", "pulse 72 bpm".
static HEART_RATE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:HR|heart\s+rate|pulse)[\s:]*(\d{2,3})(?:\s*bpm)?")
});

/// e.g. "RR: 16", "resp rate 16".
static RESPIRATORY_RATE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:RR|resp(?:iratory)?\s+rate)[\s:]*(\d{1,2})")
});

/// e.g. "glucose: 120 mg/dL", "BG 120".
static BLOOD_GLUCOSE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:BG|blood\s+glucose|glucose)[\s:]*(\d{2,3})(?:\s*mg/dL)?")
});

/// e.g. "SpO2: 98%", "oxygen sat 98".
static OXYGEN_SATURATION: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:SpO2|oxygen\s+sat(?:uration)?)[\s:]*(\d{2,3})(?:\s*%)?")
});

/// Scan `text` for vital-sign readings. Vitals without a match stay `None`.
///
/// Both temperature keys may populate from the same text when Fahrenheit and
/// Celsius readings appear in different places.
pub fn extract_measurements(text: &str) -> VitalSigns {
    let mut vitals = VitalSigns::default();

    if let Some(caps) = BLOOD_PRESSURE.captures(text) {
        vitals.blood_pressure = Some(format!("{}/{}", &caps[1], &caps[2]));
    }
    if let Some(caps) = TEMPERATURE_F.captures(text) {
        vitals.temperature_f = caps[1].parse().ok();
    }
    if let Some(caps) = TEMPERATURE_C.captures(text) {
        vitals.temperature_c = caps[1].parse().ok();
    }
    if let Some(caps) = HEART_RATE.captures(text) {
        vitals.heart_rate = caps[1].parse().ok();
    }
    if let Some(caps) = RESPIRATORY_RATE.captures(text) {
        vitals.respiratory_rate = caps[1].parse().ok();
    }
    if let Some(caps) = BLOOD_GLUCOSE.captures(text) {
        vitals.blood_glucose = caps[1].parse().ok();
    }
    if let Some(caps) = OXYGEN_SATURATION.captures(text) {
        vitals.oxygen_saturation = caps[1].parse().ok();
    }

    vitals
}
