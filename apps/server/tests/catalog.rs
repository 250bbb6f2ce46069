mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn lists_seeded_categories() {
    let app = common::spawn_app(true).await;

    let (status, body) = app.get("/api/v1/blueprint/categories").await;

    assert_eq!(status, StatusCode::OK);
    let categories = body.as_array().unwrap();
    assert_eq!(categories.len(), 10);
    assert_eq!(categories[0]["code"], "BC01");
    assert_eq!(categories[0]["isActive"], true);
}

#[tokio::test]
async fn gets_one_category_by_code() {
    let app = common::spawn_app(true).await;

    let (status, body) = app.get("/api/v1/blueprint/categories/BC07").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Motors & Controls");
    assert_eq!(body["weight"].as_f64(), Some(15.0));
}

#[tokio::test]
async fn unknown_category_is_not_found() {
    let app = common::spawn_app(true).await;

    let (status, body) = app.get("/api/v1/blueprint/categories/BC99").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Blueprint category BC99 not found");
}

#[tokio::test]
async fn lists_nec_references() {
    let app = common::spawn_app(true).await;

    let (status, body) = app.get("/api/v1/nec-refs").await;

    assert_eq!(status, StatusCode::OK);
    let refs = body.as_array().unwrap();
    assert_eq!(refs.len(), 10);
    assert!(refs.iter().all(|r| r["edition"] == "2020"));
}
