use serde_json::Value;
use thiserror::Error;

/// Upper bounds beyond which a value is suspicious but still accepted.
const AGE_WARN_THRESHOLD: f64 = 120.0;
const HEART_RATE_WARN_THRESHOLD: f64 = 200.0;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no input provided for '{0}'")]
    MissingField(&'static str),

    #[error("'user_email' input must be a string")]
    EmailNotString,

    #[error("'{0}' input must be a number")]
    NotNumeric(&'static str),
}

/// A heart-rate submission with every field checked and coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingInput {
    pub user_email: String,
    pub user_age: f64,
    pub heart_rate: f64,
}

/// Validates a loose JSON body for the POST /api/heart_rate endpoint.
///
/// `user_email` must be a JSON string; `user_age` and `heart_rate` must
/// each be a JSON number or a string parseable as one. Checks run in the
/// order email, age, heart rate and stop at the first failure, so at most
/// one error is ever reported per call.
pub fn validate_reading_input(body: &Value) -> Result<ReadingInput, ValidationError> {
    let user_email = match body.get("user_email") {
        None => return Err(ValidationError::MissingField("user_email")),
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err(ValidationError::EmailNotString),
    };

    let user_age = numeric_field(body, "user_age")?;
    if user_age > AGE_WARN_THRESHOLD {
        tracing::warn!(user_age, "Age inputted is >{}", AGE_WARN_THRESHOLD);
    }

    let heart_rate = numeric_field(body, "heart_rate")?;
    if heart_rate > HEART_RATE_WARN_THRESHOLD {
        tracing::warn!(
            heart_rate,
            "Heart rate inputted is >{}",
            HEART_RATE_WARN_THRESHOLD
        );
    }

    Ok(ReadingInput {
        user_email,
        user_age,
        heart_rate,
    })
}

/// Extracts a numeric field, accepting JSON numbers and numeric strings.
/// Non-finite values (NaN, infinities smuggled in as strings) are invalid.
fn numeric_field(body: &Value, key: &'static str) -> Result<f64, ValidationError> {
    let value = body
        .get(key)
        .ok_or(ValidationError::MissingField(key))?;

    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(ValidationError::NotNumeric(key)),
    }
}
