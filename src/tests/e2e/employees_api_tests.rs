use crate::shell::http::router;
use crate::shell::state::AppState;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use std::collections::HashSet;
use tower::ServiceExt;

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Vec<u8>) {
    let mut request = Request::builder().method(method).uri(uri);
    if body.is_some() {
        request = request.header("content-type", "application/json");
    }
    let request = request
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn json(bytes: &[u8]) -> serde_json::Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn manages_an_employee_through_its_lifecycle() {
    let app = router(AppState::in_memory());

    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/employees",
        Some(r#"{"name":"Alice","position":"Engineer","salary":50000}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = json(&body)["id"].as_i64().unwrap();

    let uri = format!("/v1/employees/{id}");
    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["name"], "Alice");

    let (status, _) = send(
        &app,
        Method::PUT,
        &uri,
        Some(r#"{"name":"Alice","position":"Senior Engineer","salary":60000}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(json(&body)["position"], "Senior Engineer");
    assert_eq!(json(&body)["salary"], 60000.0);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json(&body), serde_json::json!({ "error": "Employee does not exist" }));
}

#[tokio::test]
async fn pages_through_created_employees() {
    let app = router(AppState::in_memory());
    for (name, position, salary) in [
        ("Alice", "Engineer", 50000),
        ("Bob", "Manager", 60000),
        ("Carol", "Scientist", 70000),
    ] {
        let body = format!(r#"{{"name":"{name}","position":"{position}","salary":{salary}}}"#);
        let (status, _) = send(&app, Method::POST, "/v1/employees", Some(body.as_str())).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let mut names = HashSet::new();
    for page in 1..=2 {
        let (status, body) = send(
            &app,
            Method::GET,
            &format!("/v1/employees?page={page}&pageSize=2"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        for employee in json(&body).as_array().unwrap() {
            assert!(names.insert(employee["name"].as_str().unwrap().to_string()));
        }
    }
    assert_eq!(
        names,
        HashSet::from(["Alice".to_string(), "Bob".to_string(), "Carol".to_string()])
    );
}

#[tokio::test]
async fn rejects_unsupported_methods_and_unknown_routes() {
    let app = router(AppState::in_memory());

    let (status, _) = send(&app, Method::PATCH, "/v1/employees/1", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send(&app, Method::GET, "/v2/employees", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
