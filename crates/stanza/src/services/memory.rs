use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tiny_id::ShortCodeGenerator;

use crate::api::{ApiError, ApiResult};
use crate::data::{
    AuthResponse, CurrentUser, Favorite, LoginRequest, NewFavorite, NewPoem, NewRelationship,
    Poem, Relationship, SignupRequest, User,
};
use crate::id::{FavoriteId, Id, PoemId, RelationshipId, UserId};
use crate::log;

use super::{Endpoint, PoemService};

const TOKEN_ALPHABET: &str = "ABCDEFGHJKMNPQRSTUVWXYZabcdefghkmnpqrstuvwxyz123456789";
// The generator's code space is alphabet_len^length and must fit in a u64.
const TOKEN_LENGTH: usize = 10;

struct Account {
    user: User,
    password: String,
}

struct Backend {
    accounts: Vec<Account>,
    tokens: HashMap<String, UserId>,
    relationships: Vec<Relationship>,
    poems: Vec<Poem>,
    favorites: Vec<Favorite>,
    next_id: u64,
    failing: HashSet<Endpoint>,
    calls: HashMap<Endpoint, usize>,
    token_generator: ShortCodeGenerator<char>,
}

impl Backend {
    fn next_id<T>(&mut self) -> Id<T> {
        self.next_id += 1;
        Id::new(self.next_id)
    }

    /// Counts the call and fails it if the endpoint is marked as failing.
    fn hit(&mut self, endpoint: Endpoint) -> ApiResult<()> {
        *self.calls.entry(endpoint).or_default() += 1;
        if self.failing.contains(&endpoint) {
            log::debug!("Simulating failure for {}", endpoint.path());
            return Err(ApiError::InternalServerError);
        }
        Ok(())
    }

    fn issue_token(&mut self, user_id: UserId) -> String {
        let token = self.token_generator.next_string();
        self.tokens.insert(token.clone(), user_id);
        token
    }

    fn register(&mut self, signup: &SignupRequest) -> ApiResult<(User, String)> {
        if self
            .accounts
            .iter()
            .any(|account| account.user.username == signup.username)
        {
            return Err(ApiError::BadRequest(format!(
                "Username {} is already taken",
                signup.username
            )));
        }

        let user = User {
            id: self.next_id(),
            username: signup.username.clone(),
            name: signup.name.clone(),
            bio: signup.bio.clone(),
            avatar_url: None,
        };
        self.accounts.push(Account {
            user: user.clone(),
            password: signup.password.clone(),
        });
        let token = self.issue_token(user.id);
        Ok((user, token))
    }
}

/// An in-memory stand-in for the poem backend.
///
/// Single-threaded like the client itself. Endpoints can be switched into a
/// failing state to exercise error paths, and every call is counted.
pub struct MemoryPoemService {
    backend: RefCell<Backend>,
}

impl Default for MemoryPoemService {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPoemService {
    pub fn new() -> Self {
        let alphabet: Vec<char> = TOKEN_ALPHABET.chars().collect();
        Self {
            backend: RefCell::new(Backend {
                accounts: Vec::new(),
                tokens: HashMap::new(),
                relationships: Vec::new(),
                poems: Vec::new(),
                favorites: Vec::new(),
                next_id: 0,
                failing: HashSet::new(),
                calls: HashMap::new(),
                token_generator: ShortCodeGenerator::with_alphabet(alphabet, TOKEN_LENGTH),
            }),
        }
    }

    /// Registers a user directly and returns them with a valid token.
    pub fn add_user(&self, username: &str, password: &str) -> ApiResult<(User, String)> {
        self.backend.borrow_mut().register(&SignupRequest {
            username: username.to_string(),
            password: password.to_string(),
            name: None,
            bio: None,
        })
    }

    pub fn add_poem(&self, user_id: UserId, title: &str, content: &str) -> Poem {
        let mut backend = self.backend.borrow_mut();
        let poem = Poem {
            id: backend.next_id(),
            title: title.to_string(),
            content: content.to_string(),
            user_id,
            created_at: None,
        };
        backend.poems.push(poem.clone());
        poem
    }

    pub fn add_relationship(&self, follower_id: UserId, followed_id: UserId) -> Relationship {
        let mut backend = self.backend.borrow_mut();
        let relationship = Relationship {
            id: backend.next_id(),
            follower_id,
            followed_id,
        };
        backend.relationships.push(relationship.clone());
        relationship
    }

    pub fn add_favorite(&self, user_id: UserId, poem_id: PoemId) -> Favorite {
        let mut backend = self.backend.borrow_mut();
        let favorite = Favorite {
            id: backend.next_id(),
            user_id,
            poem_id,
        };
        backend.favorites.push(favorite.clone());
        favorite
    }

    /// Makes every following call to `endpoint` fail with a server error.
    pub fn fail(&self, endpoint: Endpoint) {
        self.backend.borrow_mut().failing.insert(endpoint);
    }

    pub fn recover(&self, endpoint: Endpoint) {
        self.backend.borrow_mut().failing.remove(&endpoint);
    }

    /// Number of calls made against `endpoint`, failed ones included.
    pub fn calls(&self, endpoint: Endpoint) -> usize {
        self.backend
            .borrow()
            .calls
            .get(&endpoint)
            .copied()
            .unwrap_or_default()
    }
}

#[async_trait(?Send)]
impl PoemService for MemoryPoemService {
    async fn users(&self) -> ApiResult<Vec<User>> {
        let mut backend = self.backend.borrow_mut();
        backend.hit(Endpoint::Users)?;
        Ok(backend.accounts.iter().map(|a| a.user.clone()).collect())
    }

    async fn current_user(&self, token: &str) -> ApiResult<CurrentUser> {
        let mut backend = self.backend.borrow_mut();
        backend.hit(Endpoint::CurrentUser)?;
        let user_id = *backend
            .tokens
            .get(token)
            .ok_or(ApiError::UnauthorizedAccess)?;
        backend
            .accounts
            .iter()
            .find(|a| a.user.id == user_id)
            .map(|a| a.user.clone())
            .ok_or(ApiError::UnauthorizedAccess)
    }

    async fn relationships(&self) -> ApiResult<Vec<Relationship>> {
        let mut backend = self.backend.borrow_mut();
        backend.hit(Endpoint::Relationships)?;
        Ok(backend.relationships.clone())
    }

    async fn poems(&self) -> ApiResult<Vec<Poem>> {
        let mut backend = self.backend.borrow_mut();
        backend.hit(Endpoint::Poems)?;
        Ok(backend.poems.clone())
    }

    async fn favorites(&self) -> ApiResult<Vec<Favorite>> {
        let mut backend = self.backend.borrow_mut();
        backend.hit(Endpoint::Favorites)?;
        Ok(backend.favorites.clone())
    }

    async fn create_relationship(&self, relationship: &NewRelationship) -> ApiResult<Relationship> {
        self.backend.borrow_mut().hit(Endpoint::Relationships)?;
        Ok(self.add_relationship(relationship.follower_id, relationship.followed_id))
    }

    async fn delete_relationship(&self, id: RelationshipId) -> ApiResult<()> {
        let mut backend = self.backend.borrow_mut();
        backend.hit(Endpoint::Relationships)?;
        let before = backend.relationships.len();
        backend.relationships.retain(|r| r.id != id);
        if backend.relationships.len() == before {
            return Err(ApiError::NotFound(format!(
                "{} not found",
                Endpoint::Relationships.member(id)
            )));
        }
        Ok(())
    }

    async fn create_favorite(&self, favorite: &NewFavorite) -> ApiResult<Favorite> {
        self.backend.borrow_mut().hit(Endpoint::Favorites)?;
        Ok(self.add_favorite(favorite.user_id, favorite.poem_id))
    }

    async fn delete_favorite(&self, id: FavoriteId) -> ApiResult<()> {
        let mut backend = self.backend.borrow_mut();
        backend.hit(Endpoint::Favorites)?;
        let before = backend.favorites.len();
        backend.favorites.retain(|f| f.id != id);
        if backend.favorites.len() == before {
            return Err(ApiError::NotFound(format!(
                "{} not found",
                Endpoint::Favorites.member(id)
            )));
        }
        Ok(())
    }

    async fn create_poem(&self, poem: &NewPoem) -> ApiResult<Poem> {
        if poem.title.trim().is_empty() || poem.content.trim().is_empty() {
            return Err(ApiError::BadRequest(
                "A poem needs a title and content".to_string(),
            ));
        }
        self.backend.borrow_mut().hit(Endpoint::Poems)?;
        Ok(self.add_poem(poem.user_id, &poem.title, &poem.content))
    }

    async fn login(&self, credentials: &LoginRequest) -> ApiResult<AuthResponse> {
        let mut backend = self.backend.borrow_mut();
        backend.hit(Endpoint::Login)?;
        let user = backend
            .accounts
            .iter()
            .find(|a| a.user.username == credentials.username && a.password == credentials.password)
            .map(|a| a.user.clone())
            .ok_or(ApiError::UnauthorizedAccess)?;
        let token = backend.issue_token(user.id);
        Ok(AuthResponse {
            token,
            user: Some(user),
        })
    }

    async fn signup(&self, signup: &SignupRequest) -> ApiResult<AuthResponse> {
        let mut backend = self.backend.borrow_mut();
        backend.hit(Endpoint::Users)?;
        let (user, token) = backend.register(signup)?;
        Ok(AuthResponse {
            token,
            user: Some(user),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_new_service_issues_distinct_tokens() {
        let service = MemoryPoemService::new();
        let (_, first) = service.add_user("ada", "pw").unwrap();
        let (_, second) = service.add_user("bo", "pw").unwrap();

        assert_eq!(first.chars().count(), TOKEN_LENGTH);
        assert_eq!(second.chars().count(), TOKEN_LENGTH);
        assert_ne!(first, second);
    }

    #[test]
    fn test_tokens_identify_their_user() {
        let service = MemoryPoemService::new();
        let (ada, ada_token) = service.add_user("ada", "pw").unwrap();
        let (_, bo_token) = service.add_user("bo", "pw").unwrap();

        assert_ne!(ada_token, bo_token);
        assert_eq!(block_on(service.current_user(&ada_token)).unwrap(), ada);
        assert!(matches!(
            block_on(service.current_user("nope")),
            Err(ApiError::UnauthorizedAccess)
        ));
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let service = MemoryPoemService::new();
        service.add_user("ada", "pw").unwrap();
        assert!(matches!(
            service.add_user("ada", "other"),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn test_login_checks_password() {
        let service = MemoryPoemService::new();
        service.add_user("ada", "pw").unwrap();

        let good = LoginRequest {
            username: "ada".to_string(),
            password: "pw".to_string(),
        };
        let bad = LoginRequest {
            password: "wrong".to_string(),
            ..good.clone()
        };

        assert!(block_on(service.login(&good)).is_ok());
        assert!(matches!(
            block_on(service.login(&bad)),
            Err(ApiError::UnauthorizedAccess)
        ));
    }

    #[test]
    fn test_delete_unknown_relationship_is_not_found() {
        let service = MemoryPoemService::new();
        assert!(matches!(
            block_on(service.delete_relationship(RelationshipId::new(99))),
            Err(ApiError::NotFound(_))
        ));
    }

    #[test]
    fn test_failure_injection_and_call_counting() {
        let service = MemoryPoemService::new();
        service.fail(Endpoint::Poems);
        assert!(block_on(service.poems()).is_err());

        service.recover(Endpoint::Poems);
        assert!(block_on(service.poems()).unwrap().is_empty());
        assert_eq!(service.calls(Endpoint::Poems), 2);
        assert_eq!(service.calls(Endpoint::Users), 0);
    }
}
