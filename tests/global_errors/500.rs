//! tests/global_errors/500.rs
//! Ensures that a failing author store maps to an HTTP 500 envelope.

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::Value;

use crate::common;

#[tokio::test]
async fn returns_500_when_author_store_fails() {
    let base_url: String = common::spawn_app(Arc::new(common::FailingRepository)).await;

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/authors", base_url))
        .send()
        .await
        .expect("Failed to make request.");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: String = resp.text().await.unwrap();
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "INTERNAL_SERVER_ERROR");
    assert_eq!(json["code"], 500);
    assert_eq!(json["messages"][0], "Failed to retrieve authors");
    assert!(json["data"].is_null());
}
