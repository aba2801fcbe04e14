//! Book endpoints

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppResult, ErrorResponse},
    models::book::{Book, BookPatch, NewBook},
};

use super::{ApiJson, ApiPath};

/// Create a book
#[utoipa::path(
    post,
    path = "/api/v1/library/books",
    tag = "books",
    request_body = NewBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Malformed or invalid body", body = ErrorResponse),
        (status = 500, description = "Storage failure (duplicate ISBN, unknown author)", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<NewBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    data.validate()?;
    let book = state.use_cases.books.create_book(data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// List all books with their authors
#[utoipa::path(
    get,
    path = "/api/v1/library/books",
    tag = "books",
    responses(
        (status = 200, description = "Book list", body = Vec<Book>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.use_cases.books.get_books().await?;
    Ok(Json(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/api/v1/library/books/{id}",
    tag = "books",
    params(("id" = Uuid, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<Book>> {
    let book = state.use_cases.books.get_book(id).await?;
    Ok(Json(book))
}

/// Partially update a book
#[utoipa::path(
    put,
    path = "/api/v1/library/books/{id}",
    tag = "books",
    params(("id" = Uuid, Path, description = "Book ID")),
    request_body = BookPatch,
    responses(
        (status = 200, description = "Book after the update", body = Book),
        (status = 400, description = "Malformed ID or body", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(patch): ApiJson<BookPatch>,
) -> AppResult<Json<Book>> {
    patch.validate()?;
    let book = state.use_cases.books.update_book(id, &patch).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/api/v1/library/books/{id}",
    tag = "books",
    params(("id" = Uuid, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<StatusCode> {
    state.use_cases.books.delete_book(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
