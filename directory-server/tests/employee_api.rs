//! Router-level tests: route wiring and DirectoryError status mapping

use axum::body::Body;
use directory_server::{Config, ServerState, build_app};
use http::{Request, StatusCode};
use httpmock::prelude::*;
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_state(server: &MockServer) -> ServerState {
    let config = Config {
        http_port: 0,
        employee_server_base_url: server.base_url(),
        max_in_flight_requests: 10,
        request_timeout_secs: None,
        environment: "test".into(),
        log_level: "info".into(),
        log_dir: None,
    };
    ServerState::initialize(&config)
}

fn app(server: &MockServer) -> axum::Router {
    build_app().with_state(test_state(server))
}

fn employee_json(id: &str, name: &str, salary: u32) -> Value {
    json!({
        "id": id,
        "employee_name": name,
        "employee_salary": salary,
        "employee_age": 30,
        "employee_title": "Engineer",
        "employee_email": format!("{}@gmail.com", name.to_lowercase().replace(' ', "."))
    })
}

fn mock_collection(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/employee");
        then.status(200).json_body(json!({"data": [
            employee_json("11111111-1111-1111-1111-111111111111", "Alice Smith", 1200),
            employee_json("22222222-2222-2222-2222-222222222222", "Bob Johnson", 2500),
            employee_json("44444444-4444-4444-4444-444444444444", "Diana Prince", 3000),
        ]}));
    });
}

async fn body_bytes(response: http::Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: http::Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn health_answers_without_touching_the_upstream() {
    let server = MockServer::start();

    let response = app(&server)
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn lists_the_full_collection() {
    let server = MockServer::start();
    mock_collection(&server);

    let response = app(&server)
        .oneshot(Request::get("/api/v1/employee").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
    assert_eq!(body[0]["name"], "Alice Smith");
}

#[tokio::test]
async fn search_route_filters_by_substring() {
    let server = MockServer::start();
    mock_collection(&server);

    let response = app(&server)
        .oneshot(
            Request::get("/api/v1/employee/search/li")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Alice Smith"]);
}

#[tokio::test]
async fn highest_salary_route_returns_a_bare_integer() {
    let server = MockServer::start();
    mock_collection(&server);

    let response = app(&server)
        .oneshot(
            Request::get("/api/v1/employee/highestSalary")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!(3000));
}

#[tokio::test]
async fn top_earner_names_route_ranks_descending() {
    let server = MockServer::start();
    mock_collection(&server);

    let response = app(&server)
        .oneshot(
            Request::get("/api/v1/employee/topTenHighestEarningEmployeeNames")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!(["Diana Prince", "Bob Johnson", "Alice Smith"])
    );
}

#[tokio::test]
async fn create_answers_created_with_the_upstream_record() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/employee");
        then.status(200).json_body(json!({
            "data": employee_json("66666666-6666-6666-6666-666666666666", "Fiona Glenanne", 1500)
        }));
    });

    let payload = json!({
        "name": "Fiona Glenanne",
        "salary": 1500,
        "age": 30,
        "title": "Engineer",
        "email": "fiona.glenanne@gmail.com"
    });
    let response = app(&server)
        .oneshot(
            Request::post("/api/v1/employee")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["id"], "66666666-6666-6666-6666-666666666666");
    assert_eq!(body["name"], "Fiona Glenanne");
}

#[tokio::test]
async fn upstream_not_found_maps_to_the_same_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/employee/unknown");
        then.status(404).body("Employee not found");
    });

    let response = app(&server)
        .oneshot(
            Request::get("/api/v1/employee/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert_eq!(body, "Employee not found");
}

#[tokio::test]
async fn unresolved_delete_maps_to_bad_request() {
    let server = MockServer::start();
    let id = "99999999-9999-9999-9999-999999999999";
    server.mock(|when, then| {
        when.method(GET).path(format!("/api/v1/employee/{id}"));
        then.status(200).json_body(json!({"data": null}));
    });

    let response = app(&server)
        .oneshot(
            Request::delete(format!("/api/v1/employee/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert_eq!(body, format!("Employee not found with ID {id}"));
}

#[tokio::test]
async fn successful_delete_answers_with_the_name() {
    let server = MockServer::start();
    let id = "11111111-1111-1111-1111-111111111111";
    server.mock(|when, then| {
        when.method(GET).path(format!("/api/v1/employee/{id}"));
        then.status(200)
            .json_body(json!({"data": employee_json(id, "Alice Smith", 1200)}));
    });
    server.mock(|when, then| {
        when.method(DELETE)
            .path("/api/v1/employee")
            .json_body(json!({"name": "Alice Smith"}));
        then.status(200).json_body(json!({"data": true}));
    });

    let response = app(&server)
        .oneshot(
            Request::delete(format!("/api/v1/employee/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!("Alice Smith"));
}
