//! Book use cases

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::book::{Book, BookPatch, NewBook},
    services::books::BooksService,
};

#[derive(Clone)]
pub struct BookUseCase {
    service: BooksService,
}

impl BookUseCase {
    pub fn new(service: BooksService) -> Self {
        Self { service }
    }

    pub async fn create_book(&self, data: NewBook) -> AppResult<Book> {
        self.service.create(data).await
    }

    pub async fn get_books(&self) -> AppResult<Vec<Book>> {
        self.service.list().await
    }

    pub async fn get_book(&self, id: Uuid) -> AppResult<Book> {
        self.service.get(id).await
    }

    pub async fn update_book(&self, id: Uuid, patch: &BookPatch) -> AppResult<Book> {
        self.service.update(id, patch).await
    }

    pub async fn delete_book(&self, id: Uuid) -> AppResult<()> {
        self.service.delete(id).await
    }
}
