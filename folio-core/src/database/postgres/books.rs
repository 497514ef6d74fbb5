use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use crate::database::ports::books::BooksRepository;
use crate::{
    error::{CatalogError, Result},
    model::{Book, NewBook},
};

/// PostgreSQL-backed implementation of the `BooksRepository` port.
#[derive(Clone, Debug)]
pub struct PostgresBooksRepository {
    pool: PgPool,
}

impl PostgresBooksRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BooksRepository for PostgresBooksRepository {
    async fn create_book(&self, author_id: i64, book: &NewBook) -> Result<Book> {
        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (name, description, isbn, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, isbn, author_id
            "#,
        )
        .bind(&book.name)
        .bind(&book.description)
        .bind(&book.isbn)
        .bind(author_id)
        .fetch_one(self.pool())
        .await
        .map_err(|e| CatalogError::Internal(format!("Failed to create book: {}", e)))?;

        info!(
            "Created book: {} ({}) under author {}",
            created.name, created.id, author_id
        );
        Ok(created)
    }

    async fn get_book_by_id(&self, id: i64) -> Result<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, name, description, isbn, author_id
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| CatalogError::Internal(format!("Failed to get book by id: {}", e)))?;

        Ok(book)
    }

    async fn find_book_by_name(&self, name: &str) -> Result<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, name, description, isbn, author_id
            FROM books
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| CatalogError::Internal(format!("Failed to find book by name: {}", e)))?;

        Ok(book)
    }

    async fn get_all_books(&self) -> Result<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, name, description, isbn, author_id
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool())
        .await
        .map_err(|e| CatalogError::Internal(format!("Failed to get all books: {}", e)))?;

        info!("Retrieved {} books", books.len());
        Ok(books)
    }

    async fn list_books_by_author(&self, author_id: i64) -> Result<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, name, description, isbn, author_id
            FROM books
            WHERE author_id = $1
            ORDER BY id
            "#,
        )
        .bind(author_id)
        .fetch_all(self.pool())
        .await
        .map_err(|e| {
            CatalogError::Internal(format!("Failed to list books by author: {}", e))
        })?;

        Ok(books)
    }

    async fn update_book(&self, book: &Book) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET name = $2, description = $3, isbn = $4, author_id = $5
            WHERE id = $1
            "#,
        )
        .bind(book.id)
        .bind(&book.name)
        .bind(&book.description)
        .bind(&book.isbn)
        .bind(book.author_id)
        .execute(self.pool())
        .await
        .map_err(|e| CatalogError::Internal(format!("Failed to update book: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::NotFound(format!(
                "book with id {} not found",
                book.id
            )));
        }

        info!("Updated book: {} ({})", book.name, book.id);
        Ok(())
    }

    async fn delete_book(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(|e| CatalogError::Internal(format!("Failed to delete book: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::NotFound(format!(
                "cannot find book with id {}",
                id
            )));
        }

        info!("Deleted book {}", id);
        Ok(())
    }
}
