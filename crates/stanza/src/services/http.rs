use async_trait::async_trait;

use crate::api::{ApiClient, ApiResult, HttpApiClient};
use crate::config::ClientConfig;
use crate::data::{
    AuthResponse, CurrentUser, Favorite, LoginRequest, NewFavorite, NewPoem, NewRelationship,
    Poem, Relationship, SignupRequest, User,
};
use crate::id::{FavoriteId, RelationshipId};

use super::{Endpoint, PoemService};

/// [`PoemService`] backed by the REST API.
#[derive(Clone, Debug)]
pub struct HttpPoemService {
    client: HttpApiClient,
    config: ClientConfig,
}

impl HttpPoemService {
    pub fn new(config: ClientConfig) -> Self {
        let mut client = HttpApiClient::new(config.api_url.clone());
        client.set_headers(vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
        ]);
        Self { client, config }
    }
}

#[async_trait(?Send)]
impl PoemService for HttpPoemService {
    async fn users(&self) -> ApiResult<Vec<User>> {
        self.client.get(Endpoint::Users.path()).await
    }

    async fn current_user(&self, token: &str) -> ApiResult<CurrentUser> {
        self.client
            .with_header("Authorization", self.config.authorization(token))
            .get(Endpoint::CurrentUser.path())
            .await
    }

    async fn relationships(&self) -> ApiResult<Vec<Relationship>> {
        self.client.get(Endpoint::Relationships.path()).await
    }

    async fn poems(&self) -> ApiResult<Vec<Poem>> {
        self.client.get(Endpoint::Poems.path()).await
    }

    async fn favorites(&self) -> ApiResult<Vec<Favorite>> {
        self.client.get(Endpoint::Favorites.path()).await
    }

    async fn create_relationship(&self, relationship: &NewRelationship) -> ApiResult<Relationship> {
        self.client
            .post(Endpoint::Relationships.path(), relationship)
            .await
    }

    async fn delete_relationship(&self, id: RelationshipId) -> ApiResult<()> {
        self.client
            .delete(&Endpoint::Relationships.member(id))
            .await
    }

    async fn create_favorite(&self, favorite: &NewFavorite) -> ApiResult<Favorite> {
        self.client.post(Endpoint::Favorites.path(), favorite).await
    }

    async fn delete_favorite(&self, id: FavoriteId) -> ApiResult<()> {
        self.client.delete(&Endpoint::Favorites.member(id)).await
    }

    async fn create_poem(&self, poem: &NewPoem) -> ApiResult<Poem> {
        self.client.post(Endpoint::Poems.path(), poem).await
    }

    async fn login(&self, credentials: &LoginRequest) -> ApiResult<AuthResponse> {
        self.client.post(Endpoint::Login.path(), credentials).await
    }

    async fn signup(&self, signup: &SignupRequest) -> ApiResult<AuthResponse> {
        self.client.post(Endpoint::Users.path(), signup).await
    }
}
