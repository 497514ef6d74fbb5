pub mod memory;
pub mod ports;
pub mod postgres;

pub use memory::{InMemoryAuthorsRepository, InMemoryBooksRepository};
pub use ports::{AuthorsRepository, BooksRepository};
pub use postgres::{PostgresAuthorsRepository, PostgresBooksRepository, PostgresDatabase};
