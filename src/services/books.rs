//! Book service

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::book::{Book, BookPatch, NewBook},
    repository::BookRepository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Arc<dyn BookRepository>,
}

impl BooksService {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// Assign a fresh identifier, persist the book and return it.
    ///
    /// When authors were linked the book is read back so the response
    /// carries them.
    pub async fn create(&self, data: NewBook) -> AppResult<Book> {
        let book = Book::create(&data);
        self.repository.save(&book, &data.author_ids).await?;
        tracing::info!("Book created: id={}, {} author(s)", book.id, data.author_ids.len());

        if data.author_ids.is_empty() {
            Ok(book)
        } else {
            self.repository.find_by_id(book.id).await
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.find_all().await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Book> {
        self.repository.find_by_id(id).await
    }

    /// Same check, write, re-read sequence as author updates
    pub async fn update(&self, id: Uuid, patch: &BookPatch) -> AppResult<Book> {
        self.repository.find_by_id(id).await?;
        self.repository.update(id, patch).await?;
        let book = self.repository.find_by_id(id).await?;
        tracing::info!("Book updated: id={}", id);
        Ok(book)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.delete(id).await?;
        tracing::info!("Book deleted: id={}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::{error::AppError, repository::MockBookRepository};

    fn dune() -> NewBook {
        NewBook {
            title: "Dune".into(),
            isbn: Some("978-0441013593".into()),
            description: Some("Desert planet".into()),
            published_year: Some(1965),
            author_ids: vec![],
        }
    }

    fn stored() -> Book {
        let now = Utc::now();
        Book {
            id: Uuid::new_v4(),
            title: "Dune".into(),
            isbn: Some("978-0441013593".into()),
            description: Some("Desert planet".into()),
            published_year: Some(1965),
            created_at: now,
            updated_at: now,
            authors: vec![],
        }
    }

    #[tokio::test]
    async fn test_create_returns_book_with_id() {
        let mut repo = MockBookRepository::new();
        repo.expect_save()
            .withf(|book: &Book, ids: &[Uuid]| !book.id.is_nil() && book.title == "Dune" && ids.is_empty())
            .times(1)
            .returning(|_, _| Ok(()));
        repo.expect_find_by_id().never();

        let service = BooksService::new(Arc::new(repo));
        let created = service.create(dune()).await.unwrap();

        assert!(!created.id.is_nil());
        assert_eq!(created.isbn.as_deref(), Some("978-0441013593"));
        assert_eq!(created.published_year, Some(1965));
    }

    #[tokio::test]
    async fn test_create_with_authors_reads_back() {
        let author_id = Uuid::new_v4();
        let mut repo = MockBookRepository::new();
        repo.expect_save()
            .withf(move |_, ids: &[Uuid]| ids.to_vec() == vec![author_id])
            .times(1)
            .returning(|_, _| Ok(()));
        repo.expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Book { id, ..stored() }));

        let service = BooksService::new(Arc::new(repo));
        let created = service
            .create(NewBook {
                author_ids: vec![author_id],
                ..dune()
            })
            .await
            .unwrap();

        assert_eq!(created.title, "Dune");
    }

    #[tokio::test]
    async fn test_create_propagates_storage_error() {
        let mut repo = MockBookRepository::new();
        repo.expect_save()
            .returning(|_, _| Err(AppError::Database(sqlx::Error::PoolTimedOut)));

        let service = BooksService::new(Arc::new(repo));
        let err = service.create(dune()).await.unwrap_err();

        assert!(matches!(err, AppError::Database(sqlx::Error::PoolTimedOut)));
    }

    #[tokio::test]
    async fn test_update_returns_reread_state() {
        let before = stored();
        let id = before.id;
        let after = Book {
            description: Some("updated description".into()),
            ..before.clone()
        };

        let mut repo = MockBookRepository::new();
        let mut seq = mockall::Sequence::new();
        repo.expect_find_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(before.clone()));
        let written = after.clone();
        repo.expect_update()
            .withf(|_, patch: &BookPatch| {
                patch.description == Some(Some("updated description".into())) && patch.title.is_none()
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_, _| Ok(written.clone()));
        let reread = after.clone();
        repo.expect_find_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(reread.clone()));

        let service = BooksService::new(Arc::new(repo));
        let patch = BookPatch {
            description: Some(Some("updated description".into())),
            ..Default::default()
        };
        let updated = service.update(id, &patch).await.unwrap();

        assert_eq!(updated, after);
        assert_eq!(updated.title, "Dune");
    }

    #[tokio::test]
    async fn test_update_missing_book() {
        let mut repo = MockBookRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Err(AppError::NotFound(format!("Book {} not found", id))));
        repo.expect_update().never();

        let service = BooksService::new(Arc::new(repo));
        let err = service
            .update(Uuid::new_v4(), &BookPatch::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_delegates() {
        let id = Uuid::new_v4();
        let mut repo = MockBookRepository::new();
        repo.expect_delete()
            .withf(move |got| *got == id)
            .times(1)
            .returning(|_| Ok(()));

        let service = BooksService::new(Arc::new(repo));
        service.delete(id).await.unwrap();
    }
}
