//! Fetching the five collections into the store.

use crate::errors::StoreError;
use crate::log;
use crate::services::PoemService;
use crate::session::TokenStore;
use crate::state::StateAction;
use crate::store::Store;

impl<A, T> Store<A, T>
where
    A: PoemService,
    T: TokenStore,
{
    /// Loads users, then the current user, relationships, poems and
    /// favorites concurrently.
    ///
    /// Each fetch replaces its own slice as soon as it completes. A failed
    /// fetch leaves its slice as it was. If users cannot be fetched nothing
    /// else is requested.
    ///
    /// # Errors
    ///
    /// Returns the first failure once every started fetch has settled.
    pub async fn load_all(&self) -> Result<(), StoreError> {
        self.fetch_users().await?;

        let (current_user, relationships, poems, favorites) = futures::join!(
            self.fetch_current_user(),
            self.fetch_relationships(),
            self.fetch_poems(),
            self.fetch_favorites(),
        );

        [current_user, relationships, poems, favorites]
            .into_iter()
            .find_map(Result::err)
            .map_or(Ok(()), Err)
    }

    pub async fn fetch_users(&self) -> Result<(), StoreError> {
        let users = self.api.users().await.inspect_err(|err| {
            log::warn!("Failed to fetch users: {err}");
        })?;
        log::debug!("Fetched {} users", users.len());
        self.dispatch(StateAction::SetUsers(users));
        Ok(())
    }

    pub async fn fetch_current_user(&self) -> Result<(), StoreError> {
        let token = self.tokens.load().ok_or(StoreError::NotSignedIn)?;
        let user = self.api.current_user(&token).await.inspect_err(|err| {
            log::warn!("Failed to fetch current user: {err}");
        })?;
        log::debug!("Current user is {}", user.username);
        self.dispatch(StateAction::SetCurrentUser(user));
        Ok(())
    }

    pub async fn fetch_relationships(&self) -> Result<(), StoreError> {
        let relationships = self.api.relationships().await.inspect_err(|err| {
            log::warn!("Failed to fetch relationships: {err}");
        })?;
        log::debug!("Fetched {} relationships", relationships.len());
        self.dispatch(StateAction::SetRelationships(relationships));
        Ok(())
    }

    pub async fn fetch_poems(&self) -> Result<(), StoreError> {
        let poems = self.api.poems().await.inspect_err(|err| {
            log::warn!("Failed to fetch poems: {err}");
        })?;
        log::debug!("Fetched {} poems", poems.len());
        self.dispatch(StateAction::SetPoems(poems));
        Ok(())
    }

    pub async fn fetch_favorites(&self) -> Result<(), StoreError> {
        let favorites = self.api.favorites().await.inspect_err(|err| {
            log::warn!("Failed to fetch favorites: {err}");
        })?;
        log::debug!("Fetched {} favorites", favorites.len());
        self.dispatch(StateAction::SetFavorites(favorites));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::api::ApiError;
    use crate::errors::StoreError;
    use crate::services::{Endpoint, MemoryPoemService};
    use crate::session::MemoryTokenStore;
    use crate::store::Store;
    use futures::executor::block_on;

    fn store() -> Store<MemoryPoemService, MemoryTokenStore> {
        let service = MemoryPoemService::new();
        let (basho, token) = service.add_user("basho", "frog").unwrap();
        service.add_poem(basho.id, "Old Pond", "A frog jumps in");
        Store::new(service, MemoryTokenStore::with_token(token))
    }

    #[test]
    fn test_users_failure_skips_dependent_fetches() {
        let store = store();
        store.api().fail(Endpoint::Users);

        let result = block_on(store.load_all());

        assert!(matches!(
            result,
            Err(StoreError::Api(ApiError::InternalServerError))
        ));
        assert_eq!(store.api().calls(Endpoint::Poems), 0);
        assert_eq!(store.api().calls(Endpoint::CurrentUser), 0);
        assert!(store.state().users.is_none());
    }

    #[test]
    fn test_one_failing_slice_does_not_block_the_others() {
        let store = store();
        store.api().fail(Endpoint::Favorites);

        let result = block_on(store.load_all());

        assert!(result.is_err());
        let state = store.state();
        assert!(state.current_user.is_some());
        assert!(state.relationships.is_some());
        assert_eq!(state.poems().len(), 1);
        assert!(state.favorites.is_none());
        assert!(!state.is_ready());
    }

    #[test]
    fn test_failed_refresh_keeps_previous_slice() {
        let store = store();
        block_on(store.load_all()).unwrap();

        store.api().fail(Endpoint::Poems);
        assert!(block_on(store.fetch_poems()).is_err());

        assert_eq!(store.state().poems().len(), 1);
        assert!(store.state().is_ready());
    }

    #[test]
    fn test_current_user_needs_token() {
        let store = Store::new(MemoryPoemService::new(), MemoryTokenStore::default());
        assert!(matches!(
            block_on(store.fetch_current_user()),
            Err(StoreError::NotSignedIn)
        ));
    }

    #[test]
    fn test_stale_token_leaves_current_user_unloaded() {
        let service = MemoryPoemService::new();
        service.add_user("basho", "frog").unwrap();
        let store = Store::new(service, MemoryTokenStore::with_token("expired"));

        let result = block_on(store.load_all());

        assert!(matches!(
            result,
            Err(StoreError::Api(ApiError::UnauthorizedAccess))
        ));
        assert!(store.state().users.is_some());
        assert!(store.state().current_user.is_none());
    }

    #[test]
    fn test_poem_refresh_notifies_subscribers_after_navigation() {
        use std::cell::Cell;
        use std::rc::Rc;

        let store = store();
        block_on(store.load_all()).unwrap();
        let author = store.state().users()[0].id;
        let poem = store.api().add_poem(author, "Autumn", "This road");

        // A view already showing the new poem re-renders once it arrives.
        let renders = Rc::new(Cell::new(0));
        {
            let renders = renders.clone();
            store.subscribe(move || renders.set(renders.get() + 1));
        }
        assert!(store.state().poem(poem.id).is_none());

        block_on(store.fetch_poems()).unwrap();

        assert_eq!(renders.get(), 1);
        assert!(store.state().poem(poem.id).is_some());
    }
}
