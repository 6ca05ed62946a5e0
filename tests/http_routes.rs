use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;
use rocket::{get, routes};
use serde_json::Value;

use cicd_app::structures::{AppError, AppResult};
use cicd_app::{AppConfig, DeploymentMode};

fn client() -> Client {
    let config = AppConfig::with_mode(DeploymentMode::default());
    let rocket = cicd_app::build(&config).expect("build rocket");
    Client::tracked(rocket).expect("valid rocket instance")
}

fn expected_environment() -> String {
    std::env::var("FLASK_ENV").unwrap_or_else(|_| "development".to_string())
}

fn get_json(client: &Client, path: &str) -> Value {
    let response = client.get(path).dispatch();
    assert_eq!(response.status(), Status::Ok, "GET {path}");
    assert_eq!(response.content_type(), Some(ContentType::JSON));
    response.into_json::<Value>().expect("json body")
}

#[test]
fn health_reports_healthy_service() {
    let client = client();
    let body = get_json(&client, "/health");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "cicd-python-app");
    assert_eq!(body["environment"], expected_environment());
    assert_eq!(body.as_object().unwrap().len(), 3);
}

#[test]
fn api_greets_with_version() {
    let client = client();
    let body = get_json(&client, "/api/");
    assert!(body["message"].as_str().unwrap().contains("Hello from CI/CD Python App!"));
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["environment"], expected_environment());
    assert_eq!(body["status"], "running");
}

#[test]
fn api_answers_with_and_without_trailing_slash() {
    let client = client();
    let slash = get_json(&client, "/api/");
    let bare = get_json(&client, "/api");
    assert_eq!(slash, bare);
    assert_eq!(slash["status"], "running");
}

#[test]
fn info_lists_three_documented_endpoints() {
    let client = client();
    let body = get_json(&client, "/info");
    assert_eq!(body["app_name"], "cicd-python-app");
    assert_eq!(body["version"], "1.0.0");
    assert!(body["description"].is_string());

    let endpoints = body["endpoints"].as_object().unwrap();
    assert_eq!(endpoints.len(), 3);
    assert_eq!(endpoints["/"], "Main endpoint");
    assert_eq!(endpoints["/health"], "Health check");
    assert_eq!(endpoints["/info"], "Application info");
}

#[test]
fn index_renders_dashboard_html() {
    let client = client();
    let response = client.get("/").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::HTML));

    let html = response.into_string().unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(&format!("Environment: {}", expected_environment())));
}

#[test]
fn unknown_path_is_json_not_found() {
    let client = client();
    let response = client.get("/this-does-not-exist").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    assert_eq!(response.content_type(), Some(ContentType::JSON));
    assert_eq!(response.into_string().unwrap(), r#"{"error":"Not found"}"#);
}

#[test]
fn post_to_get_route_is_rejected() {
    let client = client();
    let response = client.post("/").dispatch();
    let status = response.status();
    assert!(status == Status::NotFound || status == Status::MethodNotAllowed, "got {status}");
}

#[test]
fn repeated_requests_are_byte_identical() {
    let client = client();
    for path in ["/health", "/api/", "/info"] {
        let first = client.get(path).dispatch().into_string().unwrap();
        for _ in 0..3 {
            assert_eq!(client.get(path).dispatch().into_string().unwrap(), first, "GET {path}");
        }
    }
}

#[test]
fn metrics_count_served_requests() {
    let client = client();
    client.get("/health").dispatch();
    client.get("/nope").dispatch();

    let response = client.get("/metrics").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let text = response.into_string().unwrap();
    assert!(text.contains(r#"http_requests_total{method="GET",route="/health",status="200"} 1"#));
    assert!(text.contains(r#"route="unmatched",status="404""#));
}

#[get("/panic")]
fn panicking() -> &'static str {
    panic!("boom")
}

#[get("/fault")]
fn faulting() -> AppResult<&'static str> {
    Err(AppError::InvalidEnvironment { var: "FLASK_ENV" })
}

fn faulty_client() -> Client {
    let config = AppConfig::with_mode(DeploymentMode::new("production"));
    let rocket = cicd_app::build(&config)
        .expect("build rocket")
        .mount("/test", routes![panicking, faulting]);
    Client::tracked(rocket).expect("valid rocket instance")
}

#[test]
fn handler_panic_becomes_generic_500() {
    let client = faulty_client();
    let response = client.get("/test/panic").dispatch();
    assert_eq!(response.status(), Status::InternalServerError);
    assert_eq!(response.into_string().unwrap(), r#"{"error":"Internal server error"}"#);
}

#[test]
fn app_error_detail_is_not_leaked() {
    let client = faulty_client();
    let response = client.get("/test/fault").dispatch();
    assert_eq!(response.status(), Status::InternalServerError);
    let body = response.into_string().unwrap();
    assert_eq!(body, r#"{"error":"Internal server error"}"#);
    assert!(!body.contains("FLASK_ENV"));
}
