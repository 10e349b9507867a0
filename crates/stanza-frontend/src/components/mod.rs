//! Reusable UI components for the Stanza frontend.
//!
//! Contains the route gate, navigation chrome, poem cards with their follow
//! and favorite toggles, and form building blocks.

pub mod favorite_button;
pub mod follow_button;
pub mod form;
pub mod gated;
pub mod navbar;
pub mod poem_card;

pub use favorite_button::*;
pub use follow_button::*;
pub use form::*;
pub use gated::*;
pub use navbar::*;
pub use poem_card::*;
