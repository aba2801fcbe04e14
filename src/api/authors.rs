//! Author endpoints

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppResult, ErrorResponse},
    models::author::{Author, AuthorPatch, NewAuthor},
};

use super::{ApiJson, ApiPath};

/// Create an author
#[utoipa::path(
    post,
    path = "/api/v1/library/authors",
    tag = "authors",
    request_body = NewAuthor,
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 400, description = "Malformed or invalid body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<NewAuthor>,
) -> AppResult<(StatusCode, Json<Author>)> {
    data.validate()?;
    let author = state.use_cases.authors.create_author(data).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

/// List all authors
#[utoipa::path(
    get,
    path = "/api/v1/library/authors",
    tag = "authors",
    responses(
        (status = 200, description = "Author list", body = Vec<Author>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_authors(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Author>>> {
    let authors = state.use_cases.authors.get_authors().await?;
    Ok(Json(authors))
}

/// Get author by ID (also served at `/author/{id}`)
#[utoipa::path(
    get,
    path = "/api/v1/library/authors/{id}",
    tag = "authors",
    params(("id" = Uuid, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details", body = Author),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Author not found", body = ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<Author>> {
    let author = state.use_cases.authors.get_author(id).await?;
    Ok(Json(author))
}

/// Partially update an author
#[utoipa::path(
    put,
    path = "/api/v1/library/authors/{id}",
    tag = "authors",
    params(("id" = Uuid, Path, description = "Author ID")),
    request_body = AuthorPatch,
    responses(
        (status = 200, description = "Author after the update", body = Author),
        (status = 400, description = "Malformed ID or body", body = ErrorResponse),
        (status = 404, description = "Author not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn update_author(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(patch): ApiJson<AuthorPatch>,
) -> AppResult<Json<Author>> {
    patch.validate()?;
    let author = state.use_cases.authors.update_author(id, &patch).await?;
    Ok(Json(author))
}
