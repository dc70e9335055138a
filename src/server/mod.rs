//! Axum-based HTTP adapter for the prompt-to-image translator.
//!
//! This module exposes the batch translator over HTTP with JSON in and JSON
//! out. The handlers validate the request shape, delegate to the translation
//! layer, and pass its results through unchanged; a failed generation is not
//! an HTTP error.
//!
//! # Components
//!
//! - `handlers`: Implementation of the generation and health endpoints.
//! - `routes`: The router configuration and shared application state.

mod handlers;
mod routes;

pub use routes::{create_router, AppState};
