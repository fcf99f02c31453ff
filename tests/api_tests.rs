//! End-to-end API tests over an in-memory SQLite store

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use library_api::{api, config::AppConfig, db, repository::Repository, AppState};

/// Build the full application router backed by a fresh in-memory store.
async fn test_app() -> Router {
    let mut config = AppConfig::default();
    config.database.url = "sqlite::memory:".to_string();

    let pool = db::connect(&config.database).await.unwrap();
    db::create_all(&pool, true).await.unwrap();

    let state = AppState {
        config: Arc::new(config),
        repository: Repository::new(pool),
    };

    api::create_router(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_returns_ok_status() {
    let app = test_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn all_tables_are_ready_before_first_request() {
    let app = test_app().await;

    for uri in ["/authors", "/books", "/members", "/library_books", "/loans"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "listing {uri}");

        let body = body_json(response).await;
        assert_eq!(body, json!([]));
    }
}

#[tokio::test]
async fn author_crud_lifecycle() {
    let app = test_app().await;

    // Create
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/authors",
            json!({"name": "Ursula K. Le Guin", "bio": "American author"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Ursula K. Le Guin");

    // Get
    let response = app
        .clone()
        .oneshot(get(&format!("/authors/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Partial update leaves omitted fields untouched
    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/authors/{id}"),
            json!({"bio": "American novelist"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["name"], "Ursula K. Le Guin");
    assert_eq!(updated["bio"], "American novelist");

    // List
    let response = app.clone().oneshot(get("/authors")).await.unwrap();
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    // Delete
    let response = app
        .clone()
        .oneshot(delete(&format!("/authors/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Gone
    let response = app
        .oneshot(get(&format!("/authors/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_rows_return_not_found_with_error_body() {
    let app = test_app().await;

    let response = app.clone().oneshot(get("/books/9999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "not_found");
    assert!(body["message"].as_str().unwrap().contains("9999"));
}

#[tokio::test]
async fn book_creation_requires_existing_author() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/books",
            json!({"title": "Orphan Book", "author_id": 42}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn loan_flow_across_all_entities() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/authors",
            json!({"name": "Italo Calvino"}),
        ))
        .await
        .unwrap();
    let author_id = body_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/books",
            json!({
                "title": "Invisible Cities",
                "isbn": "978-0-15-645380-2",
                "published_year": 1972,
                "author_id": author_id
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let book_id = body_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/library_books",
            json!({"book_id": book_id, "barcode": "C-0001"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let copy_id = body_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/members",
            json!({"name": "Ana", "email": "ana@example.org"}),
        ))
        .await
        .unwrap();
    let member_id = body_json(response).await["id"].as_i64().unwrap();

    // Borrow the copy
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/loans",
            json!({
                "member_id": member_id,
                "library_book_id": copy_id,
                "due_date": "2026-09-20T00:00:00Z"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let loan = body_json(response).await;
    let loan_id = loan["id"].as_i64().unwrap();
    assert!(loan["loan_date"].is_string());
    assert!(loan["returned_date"].is_null());

    // Return it
    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/loans/{loan_id}"),
            json!({"returned_date": "2026-09-10T12:00:00Z"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let returned = body_json(response).await;
    assert!(returned["returned_date"].is_string());

    let response = app
        .oneshot(delete(&format!("/loans/{loan_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn creates_accept_omitted_optional_fields() {
    let app = test_app().await;

    // Author without a bio
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/authors",
            json!({"name": "B. Traven"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let author = body_json(response).await;
    let author_id = author["id"].as_i64().unwrap();
    assert!(author["bio"].is_null());

    // Book without isbn or published_year
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/books",
            json!({"title": "The Death Ship", "author_id": author_id}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let book = body_json(response).await;
    let book_id = book["id"].as_i64().unwrap();
    assert!(book["isbn"].is_null());
    assert!(book["published_year"].is_null());

    // Copy without a barcode
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/library_books",
            json!({"book_id": book_id}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let copy = body_json(response).await;
    let copy_id = copy["id"].as_i64().unwrap();
    assert!(copy["barcode"].is_null());

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/members",
            json!({"name": "Jo", "email": "jo@example.org"}),
        ))
        .await
        .unwrap();
    let member_id = body_json(response).await["id"].as_i64().unwrap();

    // Loan without a due date; returned_date stays NULL while outstanding
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/loans",
            json!({"member_id": member_id, "library_book_id": copy_id}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let loan = body_json(response).await;
    assert!(loan["due_date"].is_null());
    assert!(loan["returned_date"].is_null());

    // Every listing must survive the NULL columns just written
    for (uri, expected) in [
        ("/authors", 1),
        ("/books", 1),
        ("/library_books", 1),
        ("/loans", 1),
    ] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "listing {uri}");
        let list = body_json(response).await;
        assert_eq!(list.as_array().unwrap().len(), expected, "listing {uri}");
    }

    // Fetching a row with NULL fields works too
    let response = app
        .oneshot(get(&format!("/authors/{author_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert!(fetched["bio"].is_null());
}

#[tokio::test]
async fn deleting_a_referenced_row_is_a_conflict() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/authors",
            json!({"name": "Shirley Jackson"}),
        ))
        .await
        .unwrap();
    let author_id = body_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/books",
            json!({"title": "The Lottery", "author_id": author_id}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // The author still has a book on file
    let response = app
        .clone()
        .oneshot(delete(&format!("/authors/{author_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["error"], "conflict");

    // And remains fetchable afterwards
    let response = app
        .oneshot(get(&format!("/authors/{author_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn loan_creation_requires_existing_member_and_copy() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/loans",
            json!({"member_id": 1, "library_book_id": 1}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn handler_errors_do_not_wedge_the_service() {
    let app = test_app().await;

    // A run of failing requests must not exhaust the (single-connection) pool
    for _ in 0..5 {
        let response = app.clone().oneshot(get("/members/123")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = test_app().await;

    let response = app.oneshot(get("/api-docs/openapi.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["info"]["title"], "Library API");
    assert!(body["paths"]["/books"].is_object());
}
