//! Backend services for the poem-sharing API.
//!
//! [`PoemService`] is the seam between the store and the backend. The HTTP
//! implementation talks to the real API; the in-memory one backs tests and,
//! with the `memory-backend` feature, offline development.

pub mod http;
#[cfg(any(test, feature = "memory-backend"))]
pub mod memory;

pub use http::*;
#[cfg(any(test, feature = "memory-backend"))]
pub use memory::*;

use async_trait::async_trait;

use crate::api::ApiResult;
use crate::data::{
    AuthResponse, CurrentUser, Favorite, LoginRequest, NewFavorite, NewPoem, NewRelationship,
    Poem, Relationship, SignupRequest, User,
};
use crate::id::{FavoriteId, RelationshipId};

/// The collections and actions the backend exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Users,
    CurrentUser,
    Relationships,
    Poems,
    Favorites,
    Login,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Users => "/users",
            Endpoint::CurrentUser => "/current_user",
            Endpoint::Relationships => "/relationships",
            Endpoint::Poems => "/poems",
            Endpoint::Favorites => "/favorited_poems",
            Endpoint::Login => "/login",
        }
    }

    /// Path of a single member of this collection.
    pub fn member(&self, id: impl std::fmt::Display) -> String {
        format!("{}/{id}", self.path())
    }
}

/// Everything the client asks of the backend.
///
/// All reads return the whole collection; the client never pages or filters
/// server-side.
#[async_trait(?Send)]
pub trait PoemService {
    async fn users(&self) -> ApiResult<Vec<User>>;

    /// Fetches the user the token belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`crate::api::ApiError::UnauthorizedAccess`] for an unknown token.
    async fn current_user(&self, token: &str) -> ApiResult<CurrentUser>;

    async fn relationships(&self) -> ApiResult<Vec<Relationship>>;

    async fn poems(&self) -> ApiResult<Vec<Poem>>;

    async fn favorites(&self) -> ApiResult<Vec<Favorite>>;

    async fn create_relationship(&self, relationship: &NewRelationship) -> ApiResult<Relationship>;

    async fn delete_relationship(&self, id: RelationshipId) -> ApiResult<()>;

    async fn create_favorite(&self, favorite: &NewFavorite) -> ApiResult<Favorite>;

    async fn delete_favorite(&self, id: FavoriteId) -> ApiResult<()>;

    async fn create_poem(&self, poem: &NewPoem) -> ApiResult<Poem>;

    async fn login(&self, credentials: &LoginRequest) -> ApiResult<AuthResponse>;

    /// Registers a new user and returns a token for them.
    async fn signup(&self, signup: &SignupRequest) -> ApiResult<AuthResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Favorites.path(), "/favorited_poems");
        assert_eq!(Endpoint::Relationships.member(12), "/relationships/12");
        assert_eq!(
            Endpoint::Favorites.member(crate::id::FavoriteId::new(3)),
            "/favorited_poems/3"
        );
    }
}
