//! Intent router HTTP API: library crate for the REST server.
//!
//! Exposes `AppState` and `build_router` so the binary and the
//! end-to-end tests build the same application.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
