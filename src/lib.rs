//! Library crate for foyer-back, exposing modules for binaries and integration tests.

/// Runtime configuration loading.
pub mod config;
/// Response payloads.
pub mod dto;
mod error;
/// HTTP routes and router composition.
pub mod routes;
/// Request-independent service logic.
pub mod services;
/// Shared application state.
pub mod state;
