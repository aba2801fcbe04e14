//! Data models for the library catalog

pub mod author;
pub mod book;
pub mod book_copy;
pub mod loan;
pub mod member;
pub mod reservation;

// Re-export commonly used types
pub use author::{Author, AuthorPatch, NewAuthor};
pub use book::{Book, BookAuthor, BookPatch, NewBook};
pub use book_copy::BookCopy;
pub use loan::Loan;
pub use member::Member;
pub use reservation::Reservation;

use validator::ValidationError;

/// Reject text made only of whitespace
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
