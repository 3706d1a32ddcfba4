//! Integration tests for the HTTP API over an in-memory registry.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::DatabaseConfig;
use gateway_lib::{app, state::AppState};
use registry_service_lib::Registry;

async fn test_app() -> Router {
    let registry = Registry::open(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory registry should open");
    app(AppState::new(&registry))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn student_payload(name: &str, cpf: &str) -> Value {
    json!({
        "name": name,
        "age": 20,
        "cpf": cpf,
        "contact": "48999991234",
        "course": "Computer Science",
        "phase": 3
    })
}

fn instructor_payload(name: &str, cpf: &str) -> Value {
    json!({
        "name": name,
        "age": 45,
        "cpf": cpf,
        "contact": "(48) 3333-1234",
        "campus": "Pedra Branca",
        "title": "Doctor",
        "salary": 8500.0
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_create_student_returns_formatted_record() {
    let app = test_app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/students",
        Some(student_payload("Maria Silva", "52998224725")),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Maria Silva");
    assert_eq!(body["cpf"], "529.982.247-25");
    assert_eq!(body["contact"], "(48) 99999-1234");
    assert!(body["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_create_student_with_invalid_cpf() {
    let app = test_app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/students",
        Some(student_payload("Maria Silva", "529.982.247-24")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "CPF is invalid");
}

#[tokio::test]
async fn test_create_student_with_blank_name() {
    let app = test_app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/students",
        Some(student_payload("", "52998224725")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Name is required");
}

#[tokio::test]
async fn test_duplicate_cpf_returns_conflict() {
    let app = test_app().await;
    let payload = student_payload("Maria Silva", "52998224725");

    let (status, _) = send(&app, Method::POST, "/students", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::POST, "/students", Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");
    assert_eq!(body["error"]["message"], "CPF already exists");
}

#[tokio::test]
async fn test_list_students_with_name_filter() {
    let app = test_app().await;
    send(&app, Method::POST, "/students", Some(student_payload("Maria Silva", "52998224725"))).await;
    send(&app, Method::POST, "/students", Some(student_payload("João Souza", "11144477735"))).await;

    let (status, body) = send(&app, Method::GET, "/students", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["name"], "Maria Silva");

    let (status, body) = send(&app, Method::GET, "/students?name=souza", None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "João Souza");
}

#[tokio::test]
async fn test_get_student_by_cpf_and_missing_id() {
    let app = test_app().await;
    send(&app, Method::POST, "/students", Some(student_payload("Maria Silva", "52998224725"))).await;

    let (status, body) = send(&app, Method::GET, "/students/cpf/529.982.247-25", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Maria Silva");

    let (status, body) = send(&app, Method::GET, "/students/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Student not found");
}

#[tokio::test]
async fn test_update_and_delete_student() {
    let app = test_app().await;
    let (_, created) = send(
        &app,
        Method::POST,
        "/students",
        Some(student_payload("Maria Silva", "52998224725")),
    )
    .await;
    let uri = format!("/students/{}", created["id"]);

    let mut changed = student_payload("Maria Silva Santos", "52998224725");
    changed["phase"] = json!(4);
    let (status, body) = send(&app, Method::PUT, &uri, Some(changed)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Maria Silva Santos");
    assert_eq!(body["phase"], 4);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_instructor_endpoints() {
    let app = test_app().await;
    let (status, created) = send(
        &app,
        Method::POST,
        "/instructors",
        Some(instructor_payload("Carlos Pereira", "111.444.777-35")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["contact"], "(48) 3333-1234");

    let mut underage = instructor_payload("Paula Lima", "39053344705");
    underage["age"] = json!(17);
    let (status, body) = send(&app, Method::POST, "/instructors", Some(underage)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Age must be between 18 and 120");

    let (status, body) = send(&app, Method::GET, "/instructors", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let uri = format!("/instructors/{}", created["id"]);
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_blank_form_reports_first_field() {
    let app = test_app().await;
    let blank = json!({
        "name": "",
        "age": 0,
        "cpf": "",
        "contact": "",
        "course": "",
        "phase": 0
    });

    let (status, body) = send(&app, Method::POST, "/students", Some(blank)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Name is required");
}

#[tokio::test]
async fn test_form_errors_follow_field_order() {
    let app = test_app().await;
    let mut payload = student_payload("Maria Silva", "");
    payload["age"] = json!(0);
    payload["course"] = json!("");

    let (status, body) = send(&app, Method::POST, "/students", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Age must be between 1 and 120");

    let mut payload = instructor_payload("Carlos Pereira", "111.444.777-35");
    payload["campus"] = json!("");
    payload["title"] = json!("");
    payload["salary"] = json!(0.0);

    let (status, body) = send(&app, Method::POST, "/instructors", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Campus is required");
}

#[tokio::test]
async fn test_non_numeric_id_uses_error_envelope() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/students/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert!(body["error"]["message"].is_string());

    let (status, body) = send(&app, Method::DELETE, "/instructors/x1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_update_missing_student_is_not_found() {
    let app = test_app().await;
    let (status, body) = send(
        &app,
        Method::PUT,
        "/students/42",
        Some(student_payload("Maria Silva", "52998224725")),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "Student not found");
}

#[tokio::test]
async fn test_update_to_taken_cpf_is_conflict() {
    let app = test_app().await;
    send(&app, Method::POST, "/students", Some(student_payload("Maria Silva", "52998224725"))).await;
    let (_, joao) = send(
        &app,
        Method::POST,
        "/students",
        Some(student_payload("João Souza", "11144477735")),
    )
    .await;
    let uri = format!("/students/{}", joao["id"]);

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(student_payload("João Souza", "529.982.247-25")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["message"], "CPF already exists");

    let (_, current) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(current["cpf"], "111.444.777-35");
}
