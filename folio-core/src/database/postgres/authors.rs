use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use crate::database::ports::authors::AuthorsRepository;
use crate::{
    error::{CatalogError, Result},
    model::{Author, NewAuthor},
};

/// PostgreSQL-backed implementation of the `AuthorsRepository` port.
#[derive(Clone, Debug)]
pub struct PostgresAuthorsRepository {
    pool: PgPool,
}

impl PostgresAuthorsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl AuthorsRepository for PostgresAuthorsRepository {
    async fn create_author(&self, author: &NewAuthor) -> Result<Author> {
        let created = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (first_name, last_name)
            VALUES ($1, $2)
            RETURNING id, first_name, last_name
            "#,
        )
        .bind(&author.first_name)
        .bind(&author.last_name)
        .fetch_one(self.pool())
        .await
        .map_err(|e| CatalogError::Internal(format!("Failed to create author: {}", e)))?;

        info!("Created author: {} ({})", created.full_name(), created.id);
        Ok(created)
    }

    async fn get_author_by_id(&self, id: i64) -> Result<Option<Author>> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, first_name, last_name
            FROM authors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| CatalogError::Internal(format!("Failed to get author by id: {}", e)))?;

        Ok(author)
    }

    async fn find_author_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Author>> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, first_name, last_name
            FROM authors
            WHERE first_name = $1 AND last_name = $2
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| CatalogError::Internal(format!("Failed to find author by name: {}", e)))?;

        Ok(author)
    }

    async fn get_all_authors(&self) -> Result<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, first_name, last_name
            FROM authors
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool())
        .await
        .map_err(|e| CatalogError::Internal(format!("Failed to get all authors: {}", e)))?;

        info!("Retrieved {} authors", authors.len());
        Ok(authors)
    }

    async fn update_author(&self, author: &Author) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE authors
            SET first_name = $2, last_name = $3
            WHERE id = $1
            "#,
        )
        .bind(author.id)
        .bind(&author.first_name)
        .bind(&author.last_name)
        .execute(self.pool())
        .await
        .map_err(|e| CatalogError::Internal(format!("Failed to update author: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::NotFound(format!(
                "author with id {} not found",
                author.id
            )));
        }

        info!("Updated author: {} ({})", author.full_name(), author.id);
        Ok(())
    }

    async fn delete_author(&self, id: i64) -> Result<()> {
        // books.author_id carries ON DELETE CASCADE, so this one statement
        // also removes every book the author owns
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(|e| CatalogError::Internal(format!("Failed to delete author: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::NotFound(format!(
                "cannot find author with id {}",
                id
            )));
        }

        info!("Deleted author {}", id);
        Ok(())
    }
}
