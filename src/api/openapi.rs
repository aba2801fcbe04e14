//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Catalog API",
        version = "1.0.0",
        description = "Authors and books of a library catalog"
    ),
    paths(
        // Health
        health::health_check,
        health::ping,
        // Authors
        authors::create_author,
        authors::list_authors,
        authors::get_author,
        authors::update_author,
        // Books
        books::create_book,
        books::list_books,
        books::get_book,
        books::update_book,
        books::delete_book,
    ),
    components(
        schemas(
            crate::models::author::Author,
            crate::models::author::NewAuthor,
            crate::models::author::AuthorPatch,
            crate::models::book::Book,
            crate::models::book::NewBook,
            crate::models::book::BookPatch,
            crate::models::book::BookAuthor,
            crate::models::book_copy::BookCopy,
            crate::models::member::Member,
            crate::models::loan::Loan,
            crate::models::reservation::Reservation,
            health::HealthResponse,
            health::PingResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "authors", description = "Author management"),
        (name = "books", description = "Book management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_catalog_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/library/authors/{id}"));
        assert!(doc.paths.paths.contains_key("/api/v1/library/books"));
        let schemas = &doc.components.expect("components").schemas;
        assert!(schemas.contains_key("Reservation"));
    }
}
