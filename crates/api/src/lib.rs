//! Gift box API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes and
//! the router builder) so integration tests and the binary entrypoint can
//! both access them.

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;
