//! The shared library for Stanza, a Rust single-page client for a
//! poem-sharing site.
//!
//! This library holds everything that does not touch the DOM: the data model,
//! the API client and backend services, the application store with its
//! session, loading and mutation operations, plus configuration, errors,
//! logging and macros.

pub mod api;
pub mod config;
pub mod data;
pub mod errors;
pub mod id;
pub mod loader;
pub mod log;
pub mod macros;
pub mod mutations;
pub mod services;
pub mod session;
pub mod state;
pub mod store;

pub use serde;
pub use serde_json;
pub use tracing;

pub use store::Store;
