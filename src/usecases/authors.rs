//! Author use cases

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::author::{Author, AuthorPatch, NewAuthor},
    services::authors::AuthorsService,
};

#[derive(Clone)]
pub struct AuthorUseCase {
    service: AuthorsService,
}

impl AuthorUseCase {
    pub fn new(service: AuthorsService) -> Self {
        Self { service }
    }

    pub async fn create_author(&self, data: NewAuthor) -> AppResult<Author> {
        self.service.create(data).await
    }

    pub async fn get_authors(&self) -> AppResult<Vec<Author>> {
        self.service.list().await
    }

    pub async fn get_author(&self, id: Uuid) -> AppResult<Author> {
        self.service.get(id).await
    }

    pub async fn update_author(&self, id: Uuid, patch: &AuthorPatch) -> AppResult<Author> {
        self.service.update(id, patch).await
    }
}
