//! HTTP server for the Folio catalog.
//!
//! The binary entry point lives in `main.rs`; this library surface exists so
//! integration tests can assemble exactly the router the binary serves.

pub mod handlers;
pub mod infra;
pub mod routes;
pub mod seed;

pub use infra::app_state::AppState;
pub use routes::create_app;
