//! Business rules for the author and book catalog.
//!
//! Everything the HTTP layer needs goes through [`CatalogService`]; the
//! repositories underneath only move rows and never make policy decisions.

use std::sync::Arc;

use crate::database::ports::{AuthorsRepository, BooksRepository};
use crate::error::{CatalogError, Result};
use crate::model::{Author, Book, NewAuthor, NewBook, UpdateBook};

/// Coordinates author and book operations across the repository ports.
///
/// Uniqueness and ownership rules live here. Name collisions are checked at
/// creation time only; later updates may produce duplicates on purpose.
#[derive(Clone)]
pub struct CatalogService {
    authors: Arc<dyn AuthorsRepository>,
    books: Arc<dyn BooksRepository>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("authors_repo", &Arc::strong_count(&self.authors))
            .field("books_repo", &Arc::strong_count(&self.books))
            .finish()
    }
}

impl CatalogService {
    pub fn new(authors: Arc<dyn AuthorsRepository>, books: Arc<dyn BooksRepository>) -> Self {
        Self { authors, books }
    }

    /// Returns every author in store order. An empty catalog is not an error.
    pub async fn list_authors(&self) -> Result<Vec<Author>> {
        self.authors.get_all_authors().await
    }

    pub async fn get_author(&self, id: i64) -> Result<Author> {
        self.authors
            .get_author_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(format!("cannot find author with id {}", id)))
    }

    /// Persists a new author unless the (first name, last name) pair is taken.
    pub async fn create_author(&self, author: NewAuthor) -> Result<Author> {
        if self
            .authors
            .find_author_by_name(&author.first_name, &author.last_name)
            .await?
            .is_some()
        {
            return Err(CatalogError::AlreadyExists(format!(
                "author with name {} already exists",
                author.full_name()
            )));
        }

        self.authors.create_author(&author).await
    }

    /// Overwrites both name fields of an existing author.
    pub async fn update_author(&self, id: i64, update: NewAuthor) -> Result<Author> {
        if self.authors.get_author_by_id(id).await?.is_none() {
            return Err(CatalogError::NotFound(format!(
                "author with id {} not found",
                id
            )));
        }

        let author = Author {
            id,
            first_name: update.first_name,
            last_name: update.last_name,
        };
        self.authors.update_author(&author).await?;

        Ok(author)
    }

    /// Removes an author together with every book it owns and returns the
    /// pre-deletion snapshot.
    pub async fn delete_author(&self, id: i64) -> Result<Author> {
        let author = self
            .authors
            .get_author_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(format!("cannot find author with id {}", id)))?;

        self.authors.delete_author(id).await?;

        Ok(author)
    }

    /// Returns every book across all authors in store order.
    pub async fn list_books(&self) -> Result<Vec<Book>> {
        self.books.get_all_books().await
    }

    /// Looks up a book within one author's collection.
    ///
    /// Ownership is part of the lookup key: a book id that exists under a
    /// different author resolves to not-found, never to the foreign book.
    pub async fn get_book(&self, author_id: i64, book_id: i64) -> Result<Book> {
        self.books
            .list_books_by_author(author_id)
            .await?
            .into_iter()
            .find(|book| book.id == book_id)
            .ok_or_else(|| {
                CatalogError::NotFound(format!("cannot find book with id {}", book_id))
            })
    }

    /// Persists a new book under an existing author.
    ///
    /// The author must resolve before the name check runs, so a missing
    /// author wins over a colliding book name.
    pub async fn create_book(&self, author_id: i64, book: NewBook) -> Result<Book> {
        if self.authors.get_author_by_id(author_id).await?.is_none() {
            return Err(CatalogError::NotFound(format!(
                "author with id {} not found",
                author_id
            )));
        }

        if self.books.find_book_by_name(&book.name).await?.is_some() {
            return Err(CatalogError::AlreadyExists(format!(
                "book with name {} already exists",
                book.name
            )));
        }

        self.books.create_book(author_id, &book).await
    }

    /// Overwrites every mutable field of an existing book, including the
    /// owning author reference.
    pub async fn update_book(&self, book_id: i64, update: UpdateBook) -> Result<Book> {
        if self.books.get_book_by_id(book_id).await?.is_none() {
            return Err(CatalogError::NotFound(format!(
                "book with id {} not found",
                book_id
            )));
        }

        let book = Book {
            id: book_id,
            name: update.name,
            description: update.description,
            isbn: update.isbn,
            author_id: update.author_id,
        };
        self.books.update_book(&book).await?;

        Ok(book)
    }

    /// Removes a book and returns the pre-deletion snapshot. The owning
    /// author is untouched.
    pub async fn delete_book(&self, book_id: i64) -> Result<Book> {
        let book = self
            .books
            .get_book_by_id(book_id)
            .await?
            .ok_or_else(|| {
                CatalogError::NotFound(format!("cannot find book with id {}", book_id))
            })?;

        self.books.delete_book(book_id).await?;

        Ok(book)
    }
}
