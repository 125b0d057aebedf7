mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn create_course_returns_201() {
    let app = common::spawn_app().await;
    let student_id = app.create_student("Ada", "ada@example.com", 36).await;

    let (status, body) = app
        .post(
            "/courses/",
            json!({ "name": "Math 101", "description": "Basic Math Course", "student_id": student_id }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["name"], "Math 101");
    assert_eq!(body["description"], "Basic Math Course");
    assert_eq!(body["student_id"], student_id);
}

#[tokio::test]
async fn description_is_optional() {
    let app = common::spawn_app().await;
    let student_id = app.create_student("Ada", "ada@example.com", 36).await;

    let (status, body) = app
        .post("/courses", json!({ "name": "Logic", "student_id": student_id }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["description"].is_null());
}

#[tokio::test]
async fn course_appears_in_owner_nested_courses() {
    let app = common::spawn_app().await;
    let ada = app.create_student("Ada", "ada@example.com", 36).await;
    let grace = app.create_student("Grace", "grace@example.com", 40).await;

    let (_, math) = app
        .post("/courses/", json!({ "name": "Math 101", "student_id": ada }))
        .await;
    let (_, logic) = app
        .post("/courses/", json!({ "name": "Logic", "student_id": ada }))
        .await;
    app.post("/courses/", json!({ "name": "COBOL", "student_id": grace }))
        .await;

    let (status, body) = app.get(&format!("/students/{}", ada)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["courses"], json!([math, logic]));

    let (_, list) = app.get("/students/").await;
    let list = list.as_array().unwrap();
    assert_eq!(list[0]["courses"].as_array().unwrap().len(), 2);
    assert_eq!(list[1]["courses"][0]["name"], "COBOL");
}

#[tokio::test]
async fn unknown_student_id_fails_in_storage() {
    let app = common::spawn_app().await;
    let (status, body) = app
        .post("/courses/", json!({ "name": "Orphan", "student_id": 4242 }))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "database_error");

    let (_, list) = app.get("/courses/").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn missing_student_id_is_422() {
    let app = common::spawn_app().await;
    let (status, body) = app.post("/courses/", json!({ "name": "Math 101" })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn get_course_by_id_and_404() {
    let app = common::spawn_app().await;
    let student_id = app.create_student("Ada", "ada@example.com", 36).await;
    let (_, created) = app
        .post("/courses/", json!({ "name": "Math 101", "student_id": student_id }))
        .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = app.get(&format!("/courses/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);

    let (status, body) = app.get("/courses/777").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "not found: course 777");
}

#[tokio::test]
async fn course_pages() {
    let app = common::spawn_app().await;
    let student_id = app.create_student("Ada", "ada@example.com", 36).await;
    for i in 0..15 {
        let (status, _) = app
            .post("/courses/", json!({ "name": format!("Course {}", i), "student_id": student_id }))
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, first) = app.get("/courses/?skip=0&limit=10").await;
    let (_, second) = app.get("/courses/?skip=10&limit=10").await;
    let first = first.as_array().unwrap();
    let second = second.as_array().unwrap();
    assert_eq!(first.len(), 10);
    assert_eq!(second.len(), 5);
    assert_eq!(first[0]["name"], "Course 0");
    assert_eq!(second[0]["name"], "Course 10");
}
