//! Books repository.
//!
//! A book and its `book_authors` links are written in one transaction; reads
//! load the linked authors with a second query keyed by book id.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, Pool, Postgres, Transaction};
use uuid::Uuid;

use super::BookRepository;
use crate::{
    error::{AppError, AppResult},
    models::{
        author::Author,
        book::{Book, BookPatch},
    },
};

const BOOK_COLUMNS: &str = "id, title, isbn, description, published_year, created_at, updated_at";

/// Author row tagged with the book it is linked to
#[derive(FromRow)]
struct LinkedAuthor {
    book_id: Uuid,
    #[sqlx(flatten)]
    author: Author,
}

#[derive(Clone)]
pub struct PgBookRepository {
    pool: Pool<Postgres>,
}

impl PgBookRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Load the authors of every book in `book_ids`, grouped by book
    async fn authors_by_book(&self, book_ids: &[Uuid]) -> AppResult<HashMap<Uuid, Vec<Author>>> {
        if book_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, LinkedAuthor>(
            r#"
            SELECT ba.book_id, a.id, a.first_name, a.last_name, a.bio, a.created_at, a.updated_at
            FROM book_authors ba
            JOIN authors a ON a.id = ba.author_id
            WHERE ba.book_id = ANY($1)
            ORDER BY a.last_name, a.first_name
            "#,
        )
        .bind(book_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<Uuid, Vec<Author>> = HashMap::new();
        for row in rows {
            grouped.entry(row.book_id).or_default().push(row.author);
        }
        Ok(grouped)
    }

    async fn with_authors(&self, mut book: Book) -> AppResult<Book> {
        book.authors = self
            .authors_by_book(&[book.id])
            .await?
            .remove(&book.id)
            .unwrap_or_default();
        Ok(book)
    }
}

async fn link_authors(
    tx: &mut Transaction<'_, Postgres>,
    book_id: Uuid,
    author_ids: &[Uuid],
) -> AppResult<()> {
    if author_ids.is_empty() {
        return Ok(());
    }

    // Unknown author ids fail on the foreign key and abort the transaction
    sqlx::query(
        r#"
        INSERT INTO book_authors (book_id, author_id)
        SELECT $1, UNNEST($2::uuid[])
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(book_id)
    .bind(author_ids)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn save(&self, book: &Book, author_ids: &[Uuid]) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO books (id, title, isbn, description, published_year, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(book.id)
        .bind(&book.title)
        .bind(&book.isbn)
        .bind(&book.description)
        .bind(book.published_year)
        .bind(book.created_at)
        .bind(book.updated_at)
        .execute(&mut *tx)
        .await?;

        link_authors(&mut tx, book.id, author_ids).await?;
        tx.commit().await?;

        tracing::debug!("Book {} saved with {} author link(s)", book.id, author_ids.len());
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let mut books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books ORDER BY created_at, id",
            BOOK_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        let ids: Vec<Uuid> = books.iter().map(|b| b.id).collect();
        let mut authors = self.authors_by_book(&ids).await?;
        for book in &mut books {
            book.authors = authors.remove(&book.id).unwrap_or_default();
        }
        Ok(books)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(&format!("SELECT {} FROM books WHERE id = $1", BOOK_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

        self.with_authors(book).await
    }

    async fn update(&self, id: Uuid, patch: &BookPatch) -> AppResult<Book> {
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(patch.title, "title");
        add_field!(patch.isbn, "isbn");
        add_field!(patch.description, "description");
        add_field!(patch.published_year, "published_year");

        let query = format!(
            "UPDATE books SET {} WHERE id = ${} RETURNING {}",
            sets.join(", "),
            idx,
            BOOK_COLUMNS
        );

        let mut builder = sqlx::query_as::<_, Book>(&query).bind(Utc::now());

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(patch.title);
        bind_field!(patch.isbn);
        bind_field!(patch.description);
        bind_field!(patch.published_year);

        let mut tx = self.pool.begin().await?;

        let book = builder
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

        if let Some(ref author_ids) = patch.author_ids {
            sqlx::query("DELETE FROM book_authors WHERE book_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            link_authors(&mut tx, id, author_ids).await?;
        }

        tx.commit().await?;

        self.with_authors(book).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }
}
