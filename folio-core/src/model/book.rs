use serde::{Deserialize, Serialize};

/// A catalog book; always owned by exactly one author via `author_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub isbn: String,
    pub author_id: i64,
}

/// Fields for creating a book. The owning author comes from the request
/// path, not this payload, and the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    pub name: String,
    pub description: String,
    pub isbn: String,
}

/// Full-replace payload for updating a book. Carrying `author_id` here is
/// what permits reassigning a book to another author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBook {
    pub name: String,
    pub description: String,
    pub isbn: String,
    pub author_id: i64,
}
