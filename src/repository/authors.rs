//! Authors repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::AuthorRepository;
use crate::{
    error::{AppError, AppResult},
    models::author::{Author, AuthorPatch},
};

const AUTHOR_COLUMNS: &str = "id, first_name, last_name, bio, created_at, updated_at";

#[derive(Clone)]
pub struct PgAuthorRepository {
    pool: Pool<Postgres>,
}

impl PgAuthorRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for PgAuthorRepository {
    async fn save(&self, author: &Author) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO authors (id, first_name, last_name, bio, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(author.id)
        .bind(&author.first_name)
        .bind(&author.last_name)
        .bind(&author.bio)
        .bind(author.created_at)
        .bind(author.updated_at)
        .execute(&self.pool)
        .await?;

        tracing::debug!("Author {} saved", author.id);
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, Author>(&format!(
            "SELECT {} FROM authors ORDER BY created_at, id",
            AUTHOR_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(&format!("SELECT {} FROM authors WHERE id = $1", AUTHOR_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    async fn update(&self, id: Uuid, patch: &AuthorPatch) -> AppResult<Author> {
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

        add_field!(patch.first_name, "first_name");
        add_field!(patch.last_name, "last_name");
        add_field!(patch.bio, "bio");

        let query = format!(
            "UPDATE authors SET {} WHERE id = ${} RETURNING {}",
            sets.join(", "),
            idx,
            AUTHOR_COLUMNS
        );

        let mut builder = sqlx::query_as::<_, Author>(&query).bind(Utc::now());

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(patch.first_name);
        bind_field!(patch.last_name);
        // Some(None) binds NULL and clears the bio
        bind_field!(patch.bio);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }
}
