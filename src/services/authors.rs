//! Author service

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::author::{Author, AuthorPatch, NewAuthor},
    repository::AuthorRepository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Arc<dyn AuthorRepository>,
}

impl AuthorsService {
    pub fn new(repository: Arc<dyn AuthorRepository>) -> Self {
        Self { repository }
    }

    /// Assign a fresh identifier and persist the author.
    ///
    /// Repository errors are returned as-is.
    pub async fn create(&self, data: NewAuthor) -> AppResult<Author> {
        let author = Author::create(data);
        self.repository.save(&author).await?;
        tracing::info!("Author created: id={}", author.id);
        Ok(author)
    }

    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.repository.find_all().await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Author> {
        self.repository.find_by_id(id).await
    }

    /// Apply a partial update and return the stored state.
    ///
    /// The author must exist first; the final read returns what the store
    /// holds, including the refreshed `updated_at`. The three steps are not
    /// wrapped in a transaction.
    pub async fn update(&self, id: Uuid, patch: &AuthorPatch) -> AppResult<Author> {
        self.repository.find_by_id(id).await?;
        self.repository.update(id, patch).await?;
        let author = self.repository.find_by_id(id).await?;
        tracing::info!("Author updated: id={}", id);
        Ok(author)
    }
}
