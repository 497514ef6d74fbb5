//! API-facing facade: route constants and transport envelope types shared
//! between the server and its tests.

pub mod routes;
pub mod types;
