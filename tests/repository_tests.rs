//! Postgres repository tests.
//!
//! Need the DB_* environment variables of a disposable database.

use library_catalog::{
    config::AppConfig,
    models::{Author, AuthorPatch, Book, BookPatch, NewAuthor, NewBook},
    repository::{AuthorRepository, BookRepository, PgAuthorRepository, PgBookRepository},
    AppError,
};
use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

async fn pool() -> PgPool {
    dotenvy::dotenv().ok();
    let config = AppConfig::load().expect("DB_* variables must be set");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect_with(config.database.connect_options())
        .await
        .expect("Failed to connect to database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

fn new_author(bio: Option<&str>) -> Author {
    Author::create(NewAuthor {
        first_name: "Jane".into(),
        last_name: "Smith".into(),
        bio: bio.map(Into::into),
    })
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_save_then_find_by_id() {
    let repo = PgAuthorRepository::new(pool().await);
    let author = new_author(Some("bio"));

    repo.save(&author).await.unwrap();
    let found = repo.find_by_id(author.id).await.unwrap();

    assert_eq!(found.id, author.id);
    assert_eq!(found.first_name, "Jane");
    assert_eq!(found.last_name, "Smith");
    assert_eq!(found.bio.as_deref(), Some("bio"));
}

#[tokio::test]
#[ignore]
async fn test_partial_update_keeps_other_fields() {
    let repo = PgAuthorRepository::new(pool().await);
    let author = new_author(Some("old"));
    repo.save(&author).await.unwrap();

    let patch = AuthorPatch {
        bio: Some(Some("new bio".into())),
        ..Default::default()
    };
    let updated = repo.update(author.id, &patch).await.unwrap();

    assert_eq!(updated.bio.as_deref(), Some("new bio"));
    assert_eq!(updated.first_name, "Jane");
    assert!(updated.updated_at >= updated.created_at);

    let cleared = repo
        .update(
            author.id,
            &AuthorPatch {
                bio: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.bio, None);
    assert_eq!(cleared.last_name, "Smith");
}

#[tokio::test]
#[ignore]
async fn test_update_unknown_author() {
    let repo = PgAuthorRepository::new(pool().await);

    let err = repo
        .update(Uuid::new_v4(), &AuthorPatch::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
#[ignore]
async fn test_book_author_links_and_delete() {
    let pool = pool().await;
    let authors = PgAuthorRepository::new(pool.clone());
    let books = PgBookRepository::new(pool);

    let author = new_author(None);
    authors.save(&author).await.unwrap();

    let data = NewBook {
        title: "Dune".into(),
        isbn: None,
        description: None,
        published_year: Some(1965),
        author_ids: vec![author.id],
    };
    let book = Book::create(&data);
    books.save(&book, &data.author_ids).await.unwrap();

    let found = books.find_by_id(book.id).await.unwrap();
    assert_eq!(found.authors.len(), 1);
    assert_eq!(found.authors[0].id, author.id);

    let unlinked = books
        .update(
            book.id,
            &BookPatch {
                author_ids: Some(vec![]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(unlinked.authors.is_empty());
    assert_eq!(unlinked.published_year, Some(1965));

    books.delete(book.id).await.unwrap();
    assert!(matches!(books.find_by_id(book.id).await, Err(AppError::NotFound(_))));
    assert!(matches!(books.delete(book.id).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
#[ignore]
async fn test_duplicate_isbn_is_a_storage_error() {
    let books = PgBookRepository::new(pool().await);
    let isbn = format!("isbn-{}", Uuid::new_v4().simple());
    let data = NewBook {
        title: "Dune".into(),
        isbn: Some(isbn),
        description: None,
        published_year: None,
        author_ids: vec![],
    };

    books.save(&Book::create(&data), &[]).await.unwrap();
    let err = books.save(&Book::create(&data), &[]).await.unwrap_err();

    assert!(matches!(err, AppError::Database(_)));
}

#[tokio::test]
#[ignore]
async fn test_unknown_author_link_rolls_back() {
    let books = PgBookRepository::new(pool().await);
    let data = NewBook {
        title: "Orphan".into(),
        isbn: None,
        description: None,
        published_year: None,
        author_ids: vec![Uuid::new_v4()],
    };
    let book = Book::create(&data);

    let err = books.save(&book, &data.author_ids).await.unwrap_err();

    assert!(matches!(err, AppError::Database(_)));
    assert!(matches!(books.find_by_id(book.id).await, Err(AppError::NotFound(_))));
}
