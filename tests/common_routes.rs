mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn health_and_ready() {
    let app = common::spawn_app().await;
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = app.get("/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn openapi_document_lists_both_resources() {
    let app = common::spawn_app().await;
    let (status, doc) = app.get("/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/students/"]["post"].is_object());
    assert!(doc["paths"]["/courses/{id}"]["get"].is_object());
    assert!(doc["components"]["schemas"]["StudentResponse"].is_object());
}
