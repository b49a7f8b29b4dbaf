use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use phonebook_core::Person;
use phonebook_gateway::model::ErrorResponse;
use phonebook_gateway::{App, AppState};
use phonebook_generator::{RandomGenerator, SeqGenerator};
use phonebook_storage::memory::sample_persons;
use phonebook_storage::InMemoryStore;
use serde_json::{json, Value};
use tower::ServiceExt;

fn seeded_app() -> Router {
    let store = InMemoryStore::with_records(SeqGenerator::starting_at(5), sample_persons());
    App::router(AppState::new(Arc::new(store)))
}

struct TestResponse {
    status: StatusCode,
    content_type: Option<String>,
    body: Vec<u8>,
}

impl TestResponse {
    fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("json body")
    }

    fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("utf-8 body")
    }
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|value| value.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        content_type,
        body: body.to_vec(),
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn count(app: &Router) -> usize {
    send(app, get("/api/persons"))
        .await
        .json::<Vec<Person>>()
        .len()
}

#[tokio::test]
async fn list_returns_all_records_in_order() {
    let app = seeded_app();

    let response = send(&app, get("/api/persons")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<Vec<Person>>(), sample_persons());
}

#[tokio::test]
async fn get_existing_record() {
    let app = seeded_app();

    let response = send(&app, get("/api/persons/2")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({"id": 2, "name": "Ada Lovelace", "number": "39-44-5323523"})
    );
}

#[tokio::test]
async fn get_nonexistent_is_404_with_empty_body() {
    let app = seeded_app();

    let response = send(&app, get("/api/persons/999")).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn get_non_numeric_id_is_not_found() {
    let app = seeded_app();

    let response = send(&app, get("/api/persons/abc")).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn decimal_and_exponent_ids_name_the_same_record() {
    let app = seeded_app();

    for uri in ["/api/persons/1.0", "/api/persons/1e0"] {
        let response = send(&app, get(uri)).await;

        assert_eq!(response.status, StatusCode::OK, "{uri}");
        let person: Person = response.json();
        assert_eq!(person, Person::new(1, "Arto Hellas", "040-123456"));
    }

    let response = send(&app, get("/api/persons/1.5")).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_assigns_new_id_and_is_retrievable() {
    let app = seeded_app();
    let before: Vec<Person> = send(&app, get("/api/persons")).await.json();

    let response = send(
        &app,
        post_json(
            "/api/persons",
            json!({"name": "Grace Hopper", "number": "555-1234"}),
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let created: Person = response.json();
    assert!(before.iter().all(|p| p.id != created.id));
    assert_eq!(created.name, "Grace Hopper");
    assert_eq!(created.number, "555-1234");

    let fetched: Person = send(&app, get(&format!("/api/persons/{}", created.id)))
        .await
        .json();
    assert_eq!(fetched, created);
    assert_eq!(count(&app).await, 5);
}

#[tokio::test]
async fn create_with_random_ids_stays_in_range() {
    let store = InMemoryStore::new(RandomGenerator::new());
    let app = App::router(AppState::new(Arc::new(store)));

    let created: Person = send(
        &app,
        post_json("/api/persons", json!({"name": "Random", "number": "1"})),
    )
    .await
    .json();

    assert!(created.id.get() < 100_000);
}

#[tokio::test]
async fn create_without_name_is_rejected() {
    let app = seeded_app();

    let response = send(&app, post_json("/api/persons", json!({"number": "1"}))).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<ErrorResponse>(),
        ErrorResponse::new("content missing")
    );
    assert_eq!(count(&app).await, 4);
}

#[tokio::test]
async fn create_without_number_is_rejected() {
    let app = seeded_app();

    let response = send(&app, post_json("/api/persons", json!({"name": "Nobody"}))).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<ErrorResponse>(),
        ErrorResponse::new("content missing")
    );
    assert_eq!(count(&app).await, 4);
}

#[tokio::test]
async fn create_with_empty_name_is_rejected() {
    let app = seeded_app();

    let response = send(
        &app,
        post_json("/api/persons", json!({"name": "", "number": "1"})),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(count(&app).await, 4);
}

#[tokio::test]
async fn create_without_json_body_is_content_missing() {
    let app = seeded_app();

    let request = Request::post("/api/persons")
        .body(Body::from("name=Ada"))
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<ErrorResponse>(),
        ErrorResponse::new("content missing")
    );
}

#[tokio::test]
async fn create_duplicate_name_is_rejected() {
    let app = seeded_app();

    let response = send(
        &app,
        post_json("/api/persons", json!({"name": "Ada Lovelace", "number": "1"})),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"error": "name must be unique"})
    );
    assert_eq!(count(&app).await, 4);
}

#[tokio::test]
async fn delete_existing_record() {
    let app = seeded_app();

    let response = send(&app, delete("/api/persons/3")).await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.body.is_empty());
    assert_eq!(count(&app).await, 3);
    assert_eq!(
        send(&app, get("/api/persons/3")).await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn delete_nonexistent_record_is_still_204() {
    let app = seeded_app();

    for uri in ["/api/persons/999", "/api/persons/abc"] {
        let response = send(&app, delete(uri)).await;
        assert_eq!(response.status, StatusCode::NO_CONTENT);
    }

    assert_eq!(count(&app).await, 4);
}

#[tokio::test]
async fn info_reports_current_count() {
    let app = seeded_app();

    let response = send(&app, get("/info")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("text/html")));
    let body = response.text();
    assert!(body.starts_with("<div>"));
    assert!(body.contains("<p>Phonebook has info for 4 people</p>"));

    send(&app, delete("/api/persons/1")).await;
    let body = send(&app, get("/info")).await.text();
    assert!(body.contains("<p>Phonebook has info for 3 people</p>"));
}

#[tokio::test]
async fn unknown_path_is_unknown_endpoint() {
    let app = seeded_app();

    let response = send(&app, get("/api/people")).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({"error": "unknown endpoint"})
    );
}

#[tokio::test]
async fn update_is_not_routed_for_in_memory_store() {
    let app = seeded_app();

    let request = Request::put("/api/persons/1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"name": "Arto Hellas", "number": "1"}).to_string(),
        ))
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<ErrorResponse>(),
        ErrorResponse::new("unknown endpoint")
    );

    let unchanged: Person = send(&app, get("/api/persons/1")).await.json();
    assert_eq!(unchanged.number, "040-123456");
}

#[tokio::test]
async fn unregistered_method_is_unknown_endpoint() {
    let app = seeded_app();

    let request = Request::builder()
        .method(Method::PATCH)
        .uri("/api/persons")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<ErrorResponse>(),
        ErrorResponse::new("unknown endpoint")
    );
}

#[tokio::test]
async fn static_dir_serves_files_and_keeps_unknown_endpoint() {
    let dir = std::env::temp_dir().join(format!("phonebook-static-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<h1>phonebook</h1>").unwrap();

    let store = InMemoryStore::with_records(SeqGenerator::starting_at(5), sample_persons());
    let app = App::router_with_static_dir(AppState::new(Arc::new(store)), &dir);

    let page = send(&app, get("/index.html")).await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.text(), "<h1>phonebook</h1>");

    let api = send(&app, get("/api/persons/1")).await;
    assert_eq!(api.status, StatusCode::OK);

    let missing = send(&app, get("/nope.js")).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(
        missing.json::<ErrorResponse>(),
        ErrorResponse::new("unknown endpoint")
    );

    let posted = send(&app, post_json("/nope", json!({}))).await;
    assert_eq!(posted.status, StatusCode::NOT_FOUND);

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = seeded_app();

    let request = Request::get("/api/persons")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
