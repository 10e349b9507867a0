//! Shared error types and utilities for the stanza project.
#[cfg(not(target_arch = "wasm32"))]
pub use color_eyre::Report;

use crate::api::ApiError;
use crate::id::{PoemId, UserId};

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors surfaced by the application store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("User {follower_id} does not follow user {followed_id}")]
    RelationshipNotFound {
        follower_id: UserId,
        followed_id: UserId,
    },
    #[error("User {user_id} has not favorited poem {poem_id}")]
    FavoriteNotFound { user_id: UserId, poem_id: PoemId },
    #[error("No session token, sign in first")]
    NotSignedIn,
    #[error("Failed to persist session token: {0}")]
    Storage(String),
}
