//! # Folio Core
//!
//! Core library for the Folio catalog service, providing the author/book
//! domain model, repository ports, and storage backends.
//!
//! ## Overview
//!
//! `folio-core` is the foundation of the Folio service, offering:
//!
//! - **Domain Model**: Authors and the books they own, with store-assigned ids
//! - **Catalog Rules**: Creation-time name uniqueness and ownership-checked lookups
//! - **Repository Ports**: Trait-based storage interface supporting multiple backends
//! - **Backends**: A PostgreSQL implementation and an in-memory implementation
//!   suitable for demos and tests
//!
//! ## Architecture
//!
//! The crate is organized into a few key modules:
//!
//! - [`model`]: Author and book records plus their request payloads
//! - [`catalog`]: The [`CatalogService`] holding every business rule
//! - [`database`]: Repository ports and the Postgres/in-memory backends
//! - [`api`]: Route constants and the response envelope shared with HTTP servers
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use folio_core::CatalogService;
//! use folio_core::database::memory::{InMemoryAuthorsRepository, InMemoryBooksRepository};
//! use folio_core::model::NewAuthor;
//!
//! async fn seed_one() -> folio_core::Result<()> {
//!     let books = InMemoryBooksRepository::new();
//!     let authors = InMemoryAuthorsRepository::new(books.clone());
//!     let catalog = CatalogService::new(Arc::new(authors), Arc::new(books));
//!
//!     let author = catalog
//!         .create_author(NewAuthor {
//!             first_name: "George".to_string(),
//!             last_name: "Martin".to_string(),
//!         })
//!         .await?;
//!     println!("created author {}", author.id);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]

/// Route constants and response envelope shared with HTTP adapters
pub mod api;

/// Catalog business rules for authors and books
pub mod catalog;

/// Repository ports and storage backends
pub mod database;

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Error types and error handling utilities
pub mod error;

/// Author and book records plus request payloads
pub mod model;

pub use catalog::CatalogService;
pub use error::{CatalogError, Result};
