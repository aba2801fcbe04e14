//! Domain services

pub mod authors;
pub mod books;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub authors: authors::AuthorsService,
    pub books: books::BooksService,
}

impl Services {
    /// Create all services over the given repository ports
    pub fn new(repository: Repository) -> Self {
        Self {
            authors: authors::AuthorsService::new(repository.authors),
            books: books::BooksService::new(repository.books),
        }
    }
}
