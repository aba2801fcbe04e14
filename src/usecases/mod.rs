//! Application layer exposing service operations to the HTTP handlers

pub mod authors;
pub mod books;

pub use authors::AuthorUseCase;
pub use books::BookUseCase;

use crate::{repository::Repository, services::Services};

/// Container for all use cases
#[derive(Clone)]
pub struct UseCases {
    pub authors: AuthorUseCase,
    pub books: BookUseCase,
}

impl UseCases {
    pub fn new(services: Services) -> Self {
        Self {
            authors: AuthorUseCase::new(services.authors),
            books: BookUseCase::new(services.books),
        }
    }

    /// Wire services and use cases over the given repository
    pub fn from_repository(repository: Repository) -> Self {
        Self::new(Services::new(repository))
    }
}
