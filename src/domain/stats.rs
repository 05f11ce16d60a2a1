use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Reading;

const TACHYCARDIA_THRESHOLD: f64 = 100.0;
const BRADYCARDIA_THRESHOLD: f64 = 60.0;

/// Diagnostic category for a mean heart rate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Condition {
    Tachycardia,
    Bradycardia,
    Normal,
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Condition::Tachycardia => "Tachycardia",
            Condition::Bradycardia => "Bradycardia",
            Condition::Normal => "Normal",
        };
        f.write_str(label)
    }
}

/// Arithmetic mean of the given heart rates.
///
/// Returns `None` for an empty slice; callers turn that into an explicit
/// error rather than serving a NaN. A single-element mean is computed but
/// logged as low-confidence.
pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    if values.len() == 1 {
        tracing::warn!("Average is calculated for only one heart rate");
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Classifies a mean heart rate. Both boundaries (60 and 100) are Normal.
pub fn diagnosis(mean_hr: f64) -> Condition {
    if mean_hr > TACHYCARDIA_THRESHOLD {
        tracing::warn!(mean_hr, "Patient has tachycardia");
        Condition::Tachycardia
    } else if mean_hr < BRADYCARDIA_THRESHOLD {
        tracing::warn!(mean_hr, "Patient has bradycardia");
        Condition::Bradycardia
    } else {
        Condition::Normal
    }
}

/// Values of the readings captured strictly after `cutoff`, in their
/// original order.
pub fn readings_since(readings: &[Reading], cutoff: DateTime<Utc>) -> Vec<f64> {
    readings
        .iter()
        .filter(|r| r.timestamp > cutoff)
        .map(|r| r.value)
        .collect()
}
