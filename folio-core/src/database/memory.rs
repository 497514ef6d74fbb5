//! In-memory catalog store. Backs the test suites and demo mode; behaves
//! like the Postgres backend, including cascade on author deletion and
//! ascending-id listing order.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::database::ports::{AuthorsRepository, BooksRepository};
use crate::error::{CatalogError, Result};
use crate::model::{Author, Book, NewAuthor, NewBook};

#[derive(Default)]
struct AuthorStore {
    rows: BTreeMap<i64, Author>,
    next_id: i64,
}

#[derive(Default)]
struct BookStore {
    rows: BTreeMap<i64, Book>,
    next_id: i64,
}

/// In-memory implementation of the `BooksRepository` port.
#[derive(Clone, Default)]
pub struct InMemoryBooksRepository {
    inner: Arc<Mutex<BookStore>>,
}

impl fmt::Debug for InMemoryBooksRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryBooksRepository")
            .finish_non_exhaustive()
    }
}

impl InMemoryBooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // Cascade hook for author deletion; not part of the port.
    async fn purge_books_of_author(&self, author_id: i64) -> usize {
        let mut store = self.inner.lock().await;
        let doomed: Vec<i64> = store
            .rows
            .values()
            .filter(|book| book.author_id == author_id)
            .map(|book| book.id)
            .collect();
        for id in &doomed {
            store.rows.remove(id);
        }
        doomed.len()
    }
}

#[async_trait]
impl BooksRepository for InMemoryBooksRepository {
    async fn create_book(&self, author_id: i64, book: &NewBook) -> Result<Book> {
        let mut store = self.inner.lock().await;
        store.next_id += 1;
        let created = Book {
            id: store.next_id,
            name: book.name.clone(),
            description: book.description.clone(),
            isbn: book.isbn.clone(),
            author_id,
        };
        store.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_book_by_id(&self, id: i64) -> Result<Option<Book>> {
        let store = self.inner.lock().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn find_book_by_name(&self, name: &str) -> Result<Option<Book>> {
        let store = self.inner.lock().await;
        Ok(store.rows.values().find(|book| book.name == name).cloned())
    }

    async fn get_all_books(&self) -> Result<Vec<Book>> {
        let store = self.inner.lock().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn list_books_by_author(&self, author_id: i64) -> Result<Vec<Book>> {
        let store = self.inner.lock().await;
        Ok(store
            .rows
            .values()
            .filter(|book| book.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn update_book(&self, book: &Book) -> Result<()> {
        let mut store = self.inner.lock().await;
        if !store.rows.contains_key(&book.id) {
            return Err(CatalogError::NotFound(format!(
                "book with id {} not found",
                book.id
            )));
        }
        store.rows.insert(book.id, book.clone());
        Ok(())
    }

    async fn delete_book(&self, id: i64) -> Result<()> {
        let mut store = self.inner.lock().await;
        if store.rows.remove(&id).is_none() {
            return Err(CatalogError::NotFound(format!(
                "cannot find book with id {}",
                id
            )));
        }
        Ok(())
    }
}

/// In-memory implementation of the `AuthorsRepository` port.
///
/// Holds a handle to the book store so that deleting an author cascades,
/// mirroring the `ON DELETE CASCADE` foreign key of the Postgres schema.
#[derive(Clone)]
pub struct InMemoryAuthorsRepository {
    inner: Arc<Mutex<AuthorStore>>,
    books: InMemoryBooksRepository,
}

impl fmt::Debug for InMemoryAuthorsRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryAuthorsRepository")
            .finish_non_exhaustive()
    }
}

impl InMemoryAuthorsRepository {
    pub fn new(books: InMemoryBooksRepository) -> Self {
        Self {
            inner: Arc::new(Mutex::new(AuthorStore::default())),
            books,
        }
    }
}

#[async_trait]
impl AuthorsRepository for InMemoryAuthorsRepository {
    async fn create_author(&self, author: &NewAuthor) -> Result<Author> {
        let mut store = self.inner.lock().await;
        store.next_id += 1;
        let created = Author {
            id: store.next_id,
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
        };
        store.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_author_by_id(&self, id: i64) -> Result<Option<Author>> {
        let store = self.inner.lock().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn find_author_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Author>> {
        let store = self.inner.lock().await;
        Ok(store
            .rows
            .values()
            .find(|author| author.first_name == first_name && author.last_name == last_name)
            .cloned())
    }

    async fn get_all_authors(&self) -> Result<Vec<Author>> {
        let store = self.inner.lock().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn update_author(&self, author: &Author) -> Result<()> {
        let mut store = self.inner.lock().await;
        if !store.rows.contains_key(&author.id) {
            return Err(CatalogError::NotFound(format!(
                "author with id {} not found",
                author.id
            )));
        }
        store.rows.insert(author.id, author.clone());
        Ok(())
    }

    async fn delete_author(&self, id: i64) -> Result<()> {
        {
            let mut store = self.inner.lock().await;
            if store.rows.remove(&id).is_none() {
                return Err(CatalogError::NotFound(format!(
                    "cannot find author with id {}",
                    id
                )));
            }
        }
        // Author lock released before touching the book store.
        self.books.purge_books_of_author(id).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_author(first: &str, last: &str) -> NewAuthor {
        NewAuthor {
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    fn new_book(name: &str) -> NewBook {
        NewBook {
            name: name.to_string(),
            description: format!("about {}", name),
            isbn: "0000000".to_string(),
        }
    }

    #[tokio::test]
    async fn ids_start_at_one_and_ascend() {
        let books = InMemoryBooksRepository::new();
        let authors = InMemoryAuthorsRepository::new(books);

        let a = authors.create_author(&new_author("A", "One")).await.unwrap();
        let b = authors.create_author(&new_author("B", "Two")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn listing_preserves_creation_order() {
        let books = InMemoryBooksRepository::new();
        let authors = InMemoryAuthorsRepository::new(books);

        for (first, last) in [("C", "Three"), ("A", "One"), ("B", "Two")] {
            authors.create_author(&new_author(first, last)).await.unwrap();
        }

        let all = authors.get_all_authors().await.unwrap();
        let firsts: Vec<&str> = all.iter().map(|a| a.first_name.as_str()).collect();
        assert_eq!(firsts, ["C", "A", "B"]);
    }

    #[tokio::test]
    async fn deleting_author_purges_owned_books() {
        let books = InMemoryBooksRepository::new();
        let authors = InMemoryAuthorsRepository::new(books.clone());

        let owner = authors.create_author(&new_author("G", "M")).await.unwrap();
        let other = authors.create_author(&new_author("J", "T")).await.unwrap();
        books.create_book(owner.id, &new_book("First")).await.unwrap();
        books.create_book(owner.id, &new_book("Second")).await.unwrap();
        let kept = books.create_book(other.id, &new_book("Kept")).await.unwrap();

        authors.delete_author(owner.id).await.unwrap();

        let remaining = books.get_all_books().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, kept.id);
    }

    #[tokio::test]
    async fn update_missing_book_reports_not_found() {
        let books = InMemoryBooksRepository::new();
        let ghost = Book {
            id: 42,
            name: "Ghost".to_string(),
            description: String::new(),
            isbn: String::new(),
            author_id: 1,
        };

        let err = books.update_book(&ghost).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }
}
