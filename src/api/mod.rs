//! API handlers for the Library REST endpoints

pub mod authors;
pub mod books;
pub mod health;
pub mod library_books;
pub mod loans;
pub mod members;
pub mod openapi;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Authors
        .route("/authors", get(authors::list_authors))
        .route("/authors", post(authors::create_author))
        .route("/authors/:id", get(authors::get_author))
        .route("/authors/:id", put(authors::update_author))
        .route("/authors/:id", delete(authors::delete_author))
        // Books
        .route("/books", get(books::list_books))
        .route("/books", post(books::create_book))
        .route("/books/:id", get(books::get_book))
        .route("/books/:id", put(books::update_book))
        .route("/books/:id", delete(books::delete_book))
        // Members
        .route("/members", get(members::list_members))
        .route("/members", post(members::create_member))
        .route("/members/:id", get(members::get_member))
        .route("/members/:id", put(members::update_member))
        .route("/members/:id", delete(members::delete_member))
        // Library books (physical copies)
        .route("/library_books", get(library_books::list_library_books))
        .route("/library_books", post(library_books::create_library_book))
        .route("/library_books/:id", get(library_books::get_library_book))
        .route("/library_books/:id", put(library_books::update_library_book))
        .route("/library_books/:id", delete(library_books::delete_library_book))
        // Loans
        .route("/loans", get(loans::list_loans))
        .route("/loans", post(loans::create_loan))
        .route("/loans/:id", get(loans::get_loan))
        .route("/loans/:id", put(loans::update_loan))
        .route("/loans/:id", delete(loans::delete_loan))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    routes
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
