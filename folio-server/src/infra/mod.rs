//! Server plumbing: configuration, shared state, and error mapping.

pub mod app_state;
pub mod config;
pub mod errors;
