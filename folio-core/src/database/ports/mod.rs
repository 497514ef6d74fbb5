//! Repository ports (interfaces) for the two catalog entities.
//! The domain service depends on these traits only; implementations live in
//! `database::postgres` and `database::memory`.

pub mod authors;
pub mod books;

pub use authors::AuthorsRepository;
pub use books::BooksRepository;
