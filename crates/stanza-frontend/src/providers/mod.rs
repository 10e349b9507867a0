//! Context providers for shared application state and services.

pub mod api;
pub mod store;
pub mod token;

pub use store::{StoreContext, StoreProvider, use_store};
