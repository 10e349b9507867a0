//! Data structures exchanged with the poem-sharing backend.

use serde::{Deserialize, Serialize};

use crate::id::{FavoriteId, PoemId, RelationshipId, UserId};

/// A registered member of the site.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    /// The name to show in views, falling back to the username.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }
}

/// The user the session token belongs to.
pub type CurrentUser = User;

/// A directed follow edge from `follower_id` to `followed_id`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Relationship {
    pub id: RelationshipId,
    pub follower_id: UserId,
    pub followed_id: UserId,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Poem {
    pub id: PoemId,
    pub title: String,
    pub content: String,
    pub user_id: UserId,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Marks `poem_id` as one of `user_id`'s favorites.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: FavoriteId,
    pub user_id: UserId,
    pub poem_id: PoemId,
}

/// Body of `POST /relationships`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewRelationship {
    pub follower_id: UserId,
    pub followed_id: UserId,
}

/// Body of `POST /favorited_poems`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewFavorite {
    pub user_id: UserId,
    pub poem_id: PoemId,
}

/// Body of `POST /poems`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewPoem {
    pub title: String,
    pub content: String,
    pub user_id: UserId,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Returned by login and signup. Rails-style backends call the token `jwt`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthResponse {
    #[serde(alias = "jwt")]
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_tolerates_missing_profile_fields() {
        let user: User = serde_json::from_str(r#"{"id": 3, "username": "basho"}"#).unwrap();
        assert_eq!(user.id, UserId::new(3));
        assert_eq!(user.bio, None);
        assert_eq!(user.display_name(), "basho");
    }

    #[test]
    fn test_display_name_prefers_name() {
        let user = User {
            id: UserId::new(1),
            username: "emily".to_string(),
            name: Some("Emily Dickinson".to_string()),
            bio: None,
            avatar_url: None,
        };
        assert_eq!(user.display_name(), "Emily Dickinson");
    }

    #[test]
    fn test_auth_response_accepts_jwt_field() {
        let auth: AuthResponse = serde_json::from_str(r#"{"jwt": "abc"}"#).unwrap();
        assert_eq!(auth.token, "abc");
        assert!(auth.user.is_none());
    }

    #[test]
    fn test_new_relationship_body() {
        let body = NewRelationship {
            follower_id: UserId::new(1),
            followed_id: UserId::new(2),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"follower_id": 1, "followed_id": 2})
        );
    }

    #[test]
    fn test_signup_request_omits_empty_optionals() {
        let body = SignupRequest {
            username: "rumi".to_string(),
            password: "secret".to_string(),
            name: None,
            bio: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"username": "rumi", "password": "secret"})
        );
    }
}
