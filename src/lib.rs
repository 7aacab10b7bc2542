//! Docvault - records management gateway
//!
//! Typed client for the records API (departments, rooms, lockers, folders,
//! documents and their borrow/import workflows), the capacity rollup that
//! flags near-full containers, and an HTTP gateway serving both to the
//! frontend.

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod model;
pub mod pagination;
pub mod routes;
pub mod state;
pub mod tree;

// Re-export commonly used types
pub use client::{ApiClient, Credential};
pub use config::Config;
pub use state::AppState;
