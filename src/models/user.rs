use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One heart-rate measurement with its capture time. Immutable once
/// recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reading {
    pub value: f64,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
}

impl Reading {
    pub fn new(value: f64, timestamp: DateTime<Utc>) -> Self {
        Self { value, timestamp }
    }
}

/// A user's age and all their readings, keyed by email.
///
/// Created on the first reading for a previously-unseen email; readings
/// are append-only and never deleted. Append order is submission order,
/// which is not guaranteed chronological.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub email: String,
    pub age: f64,
    pub readings: Vec<Reading>,
}

impl UserRecord {
    pub fn new(email: String, age: f64, first_reading: Reading) -> Self {
        Self {
            email,
            age,
            readings: vec![first_reading],
        }
    }

    /// Just the measured values, in recorded order.
    pub fn heart_rates(&self) -> Vec<f64> {
        self.readings.iter().map(|r| r.value).collect()
    }
}
