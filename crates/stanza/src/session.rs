//! Session handling: the persisted token and the operations that start and
//! end a signed-in session.

use std::cell::RefCell;

use crate::api::ApiError;
use crate::data::{AuthResponse, LoginRequest, SignupRequest};
use crate::errors::StoreError;
use crate::log;
use crate::services::PoemService;
use crate::state::StateAction;
use crate::store::Store;

/// Where the single session token is persisted.
pub trait TokenStore {
    fn load(&self) -> Option<String>;

    fn save(&self, token: &str) -> Result<(), StoreError>;

    fn clear(&self);
}

/// Keeps the token for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

/// Outcome of [`Store::establish_session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStart {
    /// A token was found and the data loader ran.
    Loaded,
    /// No token and the visitor is on their way to sign up.
    Anonymous,
    /// No token; send the visitor to the login view.
    RedirectToLogin,
}

pub const SIGNUP_PATH: &str = "/signup";

impl<A, T> Store<A, T>
where
    A: PoemService,
    T: TokenStore,
{
    /// Restores the session at startup.
    ///
    /// With a persisted token every collection is loaded. Without one the
    /// caller should redirect to login, unless `current_path` is already the
    /// signup view. A token the backend rejects ends the session and is
    /// treated like no token at all.
    ///
    /// # Errors
    ///
    /// Returns the first other failure of [`Store::load_all`]. Slices that
    /// did load stay loaded.
    pub async fn establish_session(&self, current_path: &str) -> Result<SessionStart, StoreError> {
        if self.tokens.load().is_some() {
            log::info!("Found session token, loading collections");
            match self.load_all().await {
                Ok(()) => return Ok(SessionStart::Loaded),
                Err(StoreError::Api(ApiError::UnauthorizedAccess)) => {
                    log::warn!("Session token was rejected");
                    self.end_session();
                }
                Err(err) => return Err(err),
            }
        }

        if current_path.starts_with(SIGNUP_PATH) {
            Ok(SessionStart::Anonymous)
        } else {
            log::info!("No session token, redirecting to login");
            Ok(SessionStart::RedirectToLogin)
        }
    }

    /// Forgets the token and everything loaded with it.
    pub fn end_session(&self) {
        self.tokens.clear();
        self.dispatch(StateAction::Reset);
        log::info!("Session ended");
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<(), StoreError> {
        let auth = self.api.login(credentials).await?;
        self.start_session(auth).await
    }

    pub async fn signup(&self, signup: &SignupRequest) -> Result<(), StoreError> {
        let auth = self.api.signup(signup).await?;
        self.start_session(auth).await
    }

    async fn start_session(&self, auth: AuthResponse) -> Result<(), StoreError> {
        self.tokens.save(&auth.token)?;
        if let Some(user) = auth.user {
            log::info!("Signed in as {}", user.username);
            self.dispatch(StateAction::SetCurrentUser(user));
        }
        self.load_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryPoemService;
    use futures::executor::block_on;

    fn seeded() -> (MemoryPoemService, String) {
        let service = MemoryPoemService::new();
        let (basho, token) = service.add_user("basho", "frog").unwrap();
        let (issa, _) = service.add_user("issa", "snail").unwrap();
        let poem = service.add_poem(basho.id, "Old Pond", "A frog jumps in");
        service.add_relationship(issa.id, basho.id);
        service.add_favorite(issa.id, poem.id);
        (service, token)
    }

    #[test]
    fn test_establish_session_with_token_loads_every_slice() {
        let (service, token) = seeded();
        let store = Store::new(service, MemoryTokenStore::with_token(token));

        let start = block_on(store.establish_session("/poems")).unwrap();

        assert_eq!(start, SessionStart::Loaded);
        let state = store.state();
        assert!(state.is_ready());
        assert_eq!(state.users().len(), 2);
        assert_eq!(
            state.current_user.as_ref().map(|u| u.username.as_str()),
            Some("basho")
        );
        assert_eq!(state.relationships().len(), 1);
        assert_eq!(state.poems().len(), 1);
        assert_eq!(state.favorites().len(), 1);
    }

    #[test]
    fn test_establish_session_without_token_redirects_to_login() {
        let (service, _) = seeded();
        let store = Store::new(service, MemoryTokenStore::default());

        let start = block_on(store.establish_session("/poems")).unwrap();

        assert_eq!(start, SessionStart::RedirectToLogin);
        assert_eq!(store.api().calls(crate::services::Endpoint::Users), 0);
        assert!(store.state().users.is_none());
    }

    #[test]
    fn test_establish_session_without_token_stays_on_signup() {
        let store = Store::new(MemoryPoemService::new(), MemoryTokenStore::default());
        assert_eq!(
            block_on(store.establish_session("/signup")).unwrap(),
            SessionStart::Anonymous
        );
    }

    #[test]
    fn test_rejected_token_ends_session_and_redirects() {
        let (service, _) = seeded();
        let store = Store::new(service, MemoryTokenStore::with_token("expired"));

        let start = block_on(store.establish_session("/poems")).unwrap();

        assert_eq!(start, SessionStart::RedirectToLogin);
        assert!(store.tokens().load().is_none());
        assert_eq!(*store.state(), crate::state::AppState::default());
    }

    #[test]
    fn test_end_session_clears_token_and_state() {
        let (service, token) = seeded();
        let store = Store::new(service, MemoryTokenStore::with_token(token));
        block_on(store.establish_session("/poems")).unwrap();

        store.end_session();

        assert!(store.tokens().load().is_none());
        assert!(store.state().users.is_none());
        assert!(!store.state().is_ready());
    }

    #[test]
    fn test_login_persists_token_and_loads() {
        let (service, _) = seeded();
        let store = Store::new(service, MemoryTokenStore::default());

        block_on(store.login(&LoginRequest {
            username: "issa".to_string(),
            password: "snail".to_string(),
        }))
        .unwrap();

        assert!(store.tokens().load().is_some());
        assert!(store.state().is_ready());
        assert_eq!(
            store.state().current_user.as_ref().map(|u| u.username.as_str()),
            Some("issa")
        );
    }

    #[test]
    fn test_failed_login_keeps_signed_out() {
        let (service, _) = seeded();
        let store = Store::new(service, MemoryTokenStore::default());

        let result = block_on(store.login(&LoginRequest {
            username: "issa".to_string(),
            password: "slug".to_string(),
        }));

        assert!(matches!(
            result,
            Err(StoreError::Api(ApiError::UnauthorizedAccess))
        ));
        assert!(store.tokens().load().is_none());
        assert!(store.state().current_user.is_none());
    }

    #[test]
    fn test_signup_creates_user_and_signs_in() {
        let store = Store::new(MemoryPoemService::new(), MemoryTokenStore::default());

        block_on(store.signup(&SignupRequest {
            username: "buson".to_string(),
            password: "lantern".to_string(),
            name: Some("Yosa Buson".to_string()),
            bio: None,
        }))
        .unwrap();

        let state = store.state();
        assert!(state.is_ready());
        assert_eq!(state.users().len(), 1);
        assert_eq!(
            state.current_user.as_ref().map(|u| u.display_name()),
            Some("Yosa Buson")
        );
    }
}
