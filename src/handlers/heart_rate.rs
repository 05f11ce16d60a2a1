use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

use crate::domain::{average, diagnosis, readings_since, validate_reading_input};
use crate::dtos::{
    AverageResponse, IntervalAverageRequest, IntervalAverageResponse, ReadingRecordedResponse,
    ReadingsResponse,
};
use crate::error::AppError;
use crate::models::{Reading, UserRecord};
use crate::startup::AppState;

/// Wire format of the `heart_rate_average_since` field.
const SINCE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// POST /api/heart_rate
///
/// Records a reading, creating the user record on first sight of the
/// email. The timestamp is assigned here, at submission time.
pub async fn record_heart_rate(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let input = validate_reading_input(&body).map_err(|e| {
        tracing::error!(error = %e, "Invalid input");
        e
    })?;

    let reading = Reading::new(input.heart_rate, Utc::now());

    let appended = state
        .store
        .append_reading(&input.user_email, &reading)
        .await?;

    if appended {
        tracing::info!(user_email = %input.user_email, "Heart rate added to existing user");
    } else {
        // Age is persisted only at creation; later submissions still
        // validate it but leave the stored value alone.
        let record = UserRecord::new(input.user_email.clone(), input.user_age, reading);
        state.store.create_user(&record).await?;
        tracing::info!(user_email = %input.user_email, "Heart rate added to new user");
    }

    let response = ReadingRecordedResponse {
        message: "Heart rate successfully recorded.".to_string(),
        user_email: input.user_email,
        user_age: body.get("user_age").cloned().unwrap_or(Value::Null),
        heart_rate: body.get("heart_rate").cloned().unwrap_or(Value::Null),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/heart_rate/{user_email}
pub async fn get_heart_rates(
    State(state): State<AppState>,
    Path(user_email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let record = state
        .store
        .find_user(&user_email)
        .await?
        .ok_or_else(|| AppError::UnknownUser(user_email.clone()))?;

    tracing::info!(user_email = %user_email, "Readings for requested user_email retrieved");

    Ok(Json(ReadingsResponse {
        user_email,
        heart_rate: record.heart_rates(),
    }))
}

/// GET /api/heart_rate/average/{user_email}
pub async fn get_average(
    State(state): State<AppState>,
    Path(user_email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let record = state
        .store
        .find_user(&user_email)
        .await?
        .ok_or_else(|| AppError::UnknownUser(user_email.clone()))?;

    let average_hr = average(&record.heart_rates()).ok_or(AppError::NoReadings)?;

    Ok(Json(AverageResponse {
        user_email,
        average_hr,
    }))
}

/// POST /api/heart_rate/interval_average
///
/// Mean and diagnosis over the readings captured strictly after the
/// requested cutoff. An interval with no readings is a 400, never a NaN.
pub async fn interval_average(
    State(state): State<AppState>,
    Json(req): Json<IntervalAverageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let since = parse_since(&req.heart_rate_average_since).map_err(|e| {
        tracing::error!(input = %req.heart_rate_average_since, "Time specified is of an invalid format");
        e
    })?;
    tracing::info!(since = %since, "Time requested is valid");

    let record = state
        .store
        .find_user(&req.user_email)
        .await?
        .ok_or_else(|| AppError::UnknownUser(req.user_email.clone()))?;

    let values = readings_since(&record.readings, since);
    let average_hr = average(&values).ok_or(AppError::NoReadings)?;
    let condition = diagnosis(average_hr);

    Ok((
        StatusCode::CREATED,
        Json(IntervalAverageResponse {
            user_email: req.user_email,
            condition,
            average_hr,
        }),
    ))
}

fn parse_since(input: &str) -> Result<DateTime<Utc>, AppError> {
    NaiveDateTime::parse_from_str(input, SINCE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| AppError::BadTimestamp(input.to_string()))
}
