//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, health, library_books, loans, members};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library API",
        version = "0.2.0",
        description = "CRUD API for a library's authors, books, members and loans"
    ),
    paths(
        // Meta
        health::health_check,
        // Authors
        authors::list_authors,
        authors::create_author,
        authors::get_author,
        authors::update_author,
        authors::delete_author,
        // Books
        books::list_books,
        books::create_book,
        books::get_book,
        books::update_book,
        books::delete_book,
        // Members
        members::list_members,
        members::create_member,
        members::get_member,
        members::update_member,
        members::delete_member,
        // Library books
        library_books::list_library_books,
        library_books::create_library_book,
        library_books::get_library_book,
        library_books::update_library_book,
        library_books::delete_library_book,
        // Loans
        loans::list_loans,
        loans::create_loan,
        loans::get_loan,
        loans::update_loan,
        loans::delete_loan,
    ),
    components(
        schemas(
            crate::models::author::Author,
            crate::models::author::CreateAuthor,
            crate::models::author::UpdateAuthor,
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            crate::models::member::Member,
            crate::models::member::CreateMember,
            crate::models::member::UpdateMember,
            crate::models::library_book::LibraryBook,
            crate::models::library_book::CreateLibraryBook,
            crate::models::library_book::UpdateLibraryBook,
            crate::models::loan::Loan,
            crate::models::loan::CreateLoan,
            crate::models::loan::UpdateLoan,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "meta", description = "Service liveness"),
        (name = "authors", description = "Author management"),
        (name = "books", description = "Book catalog management"),
        (name = "members", description = "Member management"),
        (name = "library_books", description = "Physical copy management"),
        (name = "loans", description = "Loan management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
