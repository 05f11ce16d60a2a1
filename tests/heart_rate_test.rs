mod common;

use common::TestApp;
use reqwest::Client;
use serde_json::json;

#[tokio::test]
async fn post_reading_creates_user_and_echoes_input() {
    let app = TestApp::spawn().await;

    let response = app
        .post_reading(&json!({
            "user_email": "new@example.com",
            "user_age": 50,
            "heart_rate": 100
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Heart rate successfully recorded.");
    assert_eq!(body["user_email"], "new@example.com");
    assert_eq!(body["user_age"], 50);
    assert_eq!(body["heart_rate"], 100);

    app.cleanup().await;
}

#[tokio::test]
async fn post_reading_appends_to_existing_user() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    for hr in [60, 70, 80] {
        let response = app
            .post_reading(&json!({
                "user_email": "repeat@example.com",
                "user_age": 30,
                "heart_rate": hr
            }))
            .await;
        assert_eq!(response.status().as_u16(), 201);
    }

    let response = client
        .get(format!("{}/api/heart_rate/repeat@example.com", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["user_email"], "repeat@example.com");
    assert_eq!(body["heart_rate"], json!([60.0, 70.0, 80.0]));

    app.cleanup().await;
}

#[tokio::test]
async fn post_reading_accepts_numeric_strings() {
    let app = TestApp::spawn().await;

    let response = app
        .post_reading(&json!({
            "user_email": "strings@example.com",
            "user_age": "50",
            "heart_rate": "100"
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);

    // The echo keeps the values as submitted.
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["user_age"], "50");
    assert_eq!(body["heart_rate"], "100");

    // The stored reading is numeric.
    let client = Client::new();
    let response = client
        .get(format!(
            "{}/api/heart_rate/strings@example.com",
            app.address
        ))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["heart_rate"], json!([100.0]));

    app.cleanup().await;
}

#[tokio::test]
async fn post_reading_rejects_invalid_input() {
    let app = TestApp::spawn().await;

    // Missing email
    let response = app
        .post_reading(&json!({ "user_age": 50, "heart_rate": 100 }))
        .await;
    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Invalid input.");

    // Non-string email
    let response = app
        .post_reading(&json!({ "user_email": 45, "user_age": 50, "heart_rate": 100 }))
        .await;
    assert_eq!(response.status().as_u16(), 400);

    // Non-numeric age string
    let response = app
        .post_reading(&json!({
            "user_email": "a@b.com",
            "user_age": "fifty",
            "heart_rate": 100
        }))
        .await;
    assert_eq!(response.status().as_u16(), 400);

    // NaN heart rate (only expressible as a string in JSON)
    let response = app
        .post_reading(&json!({
            "user_email": "a@b.com",
            "user_age": 50,
            "heart_rate": "NaN"
        }))
        .await;
    assert_eq!(response.status().as_u16(), 400);

    app.cleanup().await;
}

#[tokio::test]
async fn get_readings_unknown_email_is_bad_request() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/heart_rate/nobody@example.com", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);

    app.cleanup().await;
}

#[tokio::test]
async fn average_endpoint_returns_mean_of_all_readings() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    for hr in [10, 20, 30] {
        app.post_reading(&json!({
            "user_email": "avg@example.com",
            "user_age": 40,
            "heart_rate": hr
        }))
        .await;
    }

    let response = client
        .get(format!(
            "{}/api/heart_rate/average/avg@example.com",
            app.address
        ))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["user_email"], "avg@example.com");
    assert_eq!(body["average_hr"], 20.0);

    app.cleanup().await;
}

#[tokio::test]
async fn average_endpoint_unknown_email_is_bad_request() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/api/heart_rate/average/nobody@example.com",
            app.address
        ))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);

    app.cleanup().await;
}

#[tokio::test]
async fn interval_average_classifies_readings_after_cutoff() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    for hr in [110, 120, 130] {
        app.post_reading(&json!({
            "user_email": "tachy@example.com",
            "user_age": 40,
            "heart_rate": hr
        }))
        .await;
    }

    // A cutoff far in the past includes every reading just stored.
    let response = client
        .post(format!("{}/api/heart_rate/interval_average", app.address))
        .json(&json!({
            "user_email": "tachy@example.com",
            "heart_rate_average_since": "2018-03-09 11:00:36.372339"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["user_email"], "tachy@example.com");
    assert_eq!(body["Condition"], "Tachycardia");
    assert_eq!(body["average_hr"], 120.0);

    app.cleanup().await;
}

#[tokio::test]
async fn interval_average_empty_interval_is_bad_request() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    app.post_reading(&json!({
        "user_email": "future@example.com",
        "user_age": 40,
        "heart_rate": 75
    }))
    .await;

    // A cutoff in the far future leaves nothing to average.
    let response = client
        .post(format!("{}/api/heart_rate/interval_average", app.address))
        .json(&json!({
            "user_email": "future@example.com",
            "heart_rate_average_since": "3000-01-01 00:00:00.000000"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);

    app.cleanup().await;
}

#[tokio::test]
async fn interval_average_rejects_bad_timestamp() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/heart_rate/interval_average", app.address))
        .json(&json!({
            "user_email": "anyone@example.com",
            "heart_rate_average_since": "09/03/2018 11:00"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Time specified is of an invalid format.");

    app.cleanup().await;
}

#[tokio::test]
async fn interval_average_unknown_email_is_bad_request() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/heart_rate/interval_average", app.address))
        .json(&json!({
            "user_email": "nobody@example.com",
            "heart_rate_average_since": "2018-03-09 11:00:36.372339"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);

    app.cleanup().await;
}
