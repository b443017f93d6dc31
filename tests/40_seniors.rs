mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use carelink_api::config::paths;
use common::TestApp;

const HOME_ID: i64 = 7;

fn valid_senior() -> Value {
    json!({ "seniorId": 100, "name": "Ada", "homeId": HOME_ID })
}

#[tokio::test]
async fn senior_requires_an_existing_home() -> Result<()> {
    let app = TestApp::spawn().await?;

    let rejected = app.post(paths::STORE_SENIOR, &valid_senior()).await?;
    assert_eq!(rejected.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = rejected.json::<Value>().await?;
    assert!(body["message"].as_str().unwrap_or_default().contains("home doesn't exist"));

    app.register_home(HOME_ID).await?;
    let accepted = app.post(paths::STORE_SENIOR, &valid_senior()).await?;
    assert_eq!(accepted.status(), StatusCode::CREATED);
    Ok(())
}

#[tokio::test]
async fn caller_supplied_enabled_and_sensor_are_discarded() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.register_home(HOME_ID).await?;

    let mut payload = valid_senior();
    payload["enabled"] = json!(true);
    payload["sensorId"] = json!(55);

    let response = app.post(paths::STORE_SENIOR, &payload).await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.json::<Value>().await?;
    assert_eq!(body["enabled"], false);
    assert!(body.get("sensorId").is_none());

    // The stored record agrees with the response.
    let fetched = app.fetch_senior(100).await?.json::<Value>().await?;
    assert_eq!(fetched["enabled"], false);
    assert!(fetched.get("sensorId").is_none());
    assert!(fetched.get("_id").is_none());
    Ok(())
}

#[tokio::test]
async fn each_missing_field_is_rejected() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.register_home(HOME_ID).await?;

    for field in ["seniorId", "name", "homeId"] {
        let mut body = valid_senior();
        body.as_object_mut().unwrap().remove(field);

        let response = app.post(paths::STORE_SENIOR, &body).await?;
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "payload without {field} should be rejected"
        );
    }
    Ok(())
}

#[tokio::test]
async fn out_of_range_senior_ids_are_rejected() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.register_home(HOME_ID).await?;

    for senior_id in [0_i64, -42, 1 << 31] {
        let mut body = valid_senior();
        body["seniorId"] = json!(senior_id);

        let response = app.post(paths::STORE_SENIOR, &body).await?;
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "seniorId {senior_id} should be rejected"
        );
    }
    Ok(())
}

#[tokio::test]
async fn fetching_an_unknown_senior_is_not_found() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app.fetch_senior(424242).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.json::<Value>().await?;
    assert!(body["message"].as_str().unwrap_or_default().contains("doesn't exist"));
    assert!(body.get("seniorId").is_none());
    Ok(())
}

#[tokio::test]
async fn fetch_rejects_out_of_range_ids() -> Result<()> {
    let app = TestApp::spawn().await?;

    for senior_id in [0_i64, -1] {
        let response = app.fetch_senior(senior_id).await?;
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "seniorId {senior_id} should be rejected"
        );
    }
    Ok(())
}

#[tokio::test]
async fn fetch_with_malformed_query_is_rejected() -> Result<()> {
    let app = TestApp::spawn().await?;

    let non_numeric = app.get(&format!("{}?seniorId=abc", paths::GET_SENIOR)).await?;
    assert_eq!(non_numeric.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let missing = app.get(paths::GET_SENIOR).await?;
    assert_eq!(missing.status(), StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}
