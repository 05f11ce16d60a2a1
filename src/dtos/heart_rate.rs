use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::Condition;

/// Echo response for a recorded reading. `user_age` and `heart_rate` are
/// returned exactly as submitted (a numeric string stays a string).
#[derive(Debug, Serialize)]
pub struct ReadingRecordedResponse {
    pub message: String,
    pub user_email: String,
    pub user_age: Value,
    pub heart_rate: Value,
}

#[derive(Debug, Serialize)]
pub struct ReadingsResponse {
    pub user_email: String,
    pub heart_rate: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct AverageResponse {
    pub user_email: String,
    pub average_hr: f64,
}

#[derive(Debug, Deserialize)]
pub struct IntervalAverageRequest {
    pub user_email: String,
    /// Cutoff in "YYYY-MM-DD HH:MM:SS.ffffff" form.
    pub heart_rate_average_since: String,
}

#[derive(Debug, Serialize)]
pub struct IntervalAverageResponse {
    pub user_email: String,
    #[serde(rename = "Condition")]
    pub condition: Condition,
    pub average_hr: f64,
}
