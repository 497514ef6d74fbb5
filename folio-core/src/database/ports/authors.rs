use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Author, NewAuthor};

// Author persistence port. Implementations are expected to keep
// `get_all_authors` in ascending-id order so listings reflect creation order.
#[async_trait]
pub trait AuthorsRepository: Send + Sync {
    async fn create_author(&self, author: &NewAuthor) -> Result<Author>;
    async fn get_author_by_id(&self, id: i64) -> Result<Option<Author>>;
    async fn find_author_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Author>>;
    async fn get_all_authors(&self) -> Result<Vec<Author>>;
    async fn update_author(&self, author: &Author) -> Result<()>;

    /// Deleting an author also deletes every book it owns.
    async fn delete_author(&self, id: i64) -> Result<()>;
}
