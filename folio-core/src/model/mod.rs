pub mod author;
pub mod book;

pub use author::{Author, NewAuthor};
pub use book::{Book, NewBook, UpdateBook};
