use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Book, NewBook};

// Book persistence port. Books reference their owner by id; there is no
// back-pointer collection on the author side, so "an author's books" is the
// explicit `list_books_by_author` query.
#[async_trait]
pub trait BooksRepository: Send + Sync {
    async fn create_book(&self, author_id: i64, book: &NewBook) -> Result<Book>;
    async fn get_book_by_id(&self, id: i64) -> Result<Option<Book>>;
    async fn find_book_by_name(&self, name: &str) -> Result<Option<Book>>;
    async fn get_all_books(&self) -> Result<Vec<Book>>;
    async fn list_books_by_author(&self, author_id: i64) -> Result<Vec<Book>>;
    async fn update_book(&self, book: &Book) -> Result<()>;
    async fn delete_book(&self, id: i64) -> Result<()>;
}
