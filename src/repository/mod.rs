//! Repository layer: persistence ports and their Postgres adapters.
//!
//! Services only see the [`AuthorRepository`] and [`BookRepository`] traits;
//! the Postgres implementations receive their pool at construction time.

pub mod authors;
pub mod books;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Author, AuthorPatch, Book, BookPatch},
};

pub use authors::PgAuthorRepository;
pub use books::PgBookRepository;

/// Persistence port for authors
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Insert an author whose identifier is already set
    async fn save(&self, author: &Author) -> AppResult<()>;

    async fn find_all(&self) -> AppResult<Vec<Author>>;

    /// Fails with `AppError::NotFound` when no row matches
    async fn find_by_id(&self, id: Uuid) -> AppResult<Author>;

    /// Apply only the fields present in `patch`
    async fn update(&self, id: Uuid, patch: &AuthorPatch) -> AppResult<Author>;
}

/// Persistence port for books and their author links
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert a book whose identifier is already set, linking `author_ids`
    async fn save(&self, book: &Book, author_ids: &[Uuid]) -> AppResult<()>;

    async fn find_all(&self) -> AppResult<Vec<Book>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Book>;

    async fn update(&self, id: Uuid, patch: &BookPatch) -> AppResult<Book>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Main repository struct holding one adapter per aggregate
#[derive(Clone)]
pub struct Repository {
    pub authors: Arc<dyn AuthorRepository>,
    pub books: Arc<dyn BookRepository>,
}

impl Repository {
    /// Create Postgres-backed repositories sharing the given pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            authors: Arc::new(PgAuthorRepository::new(pool.clone())),
            books: Arc::new(PgBookRepository::new(pool)),
        }
    }

    /// Assemble a repository from arbitrary port implementations
    pub fn from_ports(authors: Arc<dyn AuthorRepository>, books: Arc<dyn BookRepository>) -> Self {
        Self { authors, books }
    }
}
