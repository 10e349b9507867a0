//! Custom hooks shared by pages and components.

pub mod use_actions;

pub use use_actions::*;
