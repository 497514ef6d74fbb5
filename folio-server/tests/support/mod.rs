use std::sync::Arc;

use axum_test::TestServer;
use folio_core::CatalogService;
use folio_core::database::memory::{InMemoryAuthorsRepository, InMemoryBooksRepository};
use folio_server::infra::config::{Config, DatabaseConfig, ServerConfig};
use folio_server::{AppState, create_app};

/// Boots a test server over a fresh in-memory catalog.
pub fn build_test_server() -> TestServer {
    let books = InMemoryBooksRepository::new();
    let authors = InMemoryAuthorsRepository::new(books.clone());
    let catalog = CatalogService::new(Arc::new(authors), Arc::new(books));

    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig { url: None },
        demo: false,
        env_file_loaded: false,
    };

    let state = AppState::new(Arc::new(config), catalog);
    TestServer::new(create_app(state)).expect("test server should boot")
}
