//! API handlers for the library catalog REST endpoints

pub mod authors;
pub mod books;
pub mod health;
pub mod openapi;


use axum::{
    extract::{FromRequest, FromRequestParts},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body extractor answering malformed payloads with a 400 error body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path extractor answering malformed identifiers with a 400 error body
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let library = Router::new()
        // Authors
        .route("/authors", get(authors::list_authors).post(authors::create_author))
        .route("/authors/:id", get(authors::get_author).put(authors::update_author))
        .route("/author/:id", get(authors::get_author))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .with_state(state);

    Router::new()
        .route("/ping", get(health::ping))
        .route("/api/v1/health", get(health::health_check))
        .nest("/api/v1/library", library)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
