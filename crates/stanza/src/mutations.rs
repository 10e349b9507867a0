//! Follow, favorite and authoring actions.
//!
//! Every mutation talks to the backend and then re-fetches the collection it
//! touched. There is no optimistic update and nothing is rolled back.

use crate::data::{Favorite, NewFavorite, NewPoem, NewRelationship, Poem, Relationship};
use crate::errors::StoreError;
use crate::id::{PoemId, UserId};
use crate::log;
use crate::services::PoemService;
use crate::session::TokenStore;
use crate::store::Store;

impl<A, T> Store<A, T>
where
    A: PoemService,
    T: TokenStore,
{
    pub async fn follow(
        &self,
        follower_id: UserId,
        followed_id: UserId,
    ) -> Result<Relationship, StoreError> {
        let relationship = self
            .api
            .create_relationship(&NewRelationship {
                follower_id,
                followed_id,
            })
            .await?;
        log::info!("User {follower_id} now follows user {followed_id}");
        self.fetch_relationships().await?;
        Ok(relationship)
    }

    /// Deletes the first relationship from `follower_id` to `followed_id`.
    ///
    /// # Errors
    ///
    /// [`StoreError::RelationshipNotFound`] when the loaded relationships hold
    /// no such pair. Nothing is sent to the backend in that case.
    pub async fn unfollow(&self, follower_id: UserId, followed_id: UserId) -> Result<(), StoreError> {
        let id = self
            .state()
            .find_relationship(follower_id, followed_id)
            .map(|relationship| relationship.id)
            .ok_or(StoreError::RelationshipNotFound {
                follower_id,
                followed_id,
            })?;

        self.api.delete_relationship(id).await?;
        log::info!("User {follower_id} unfollowed user {followed_id}");
        self.fetch_relationships().await
    }

    pub async fn favorite(&self, user_id: UserId, poem_id: PoemId) -> Result<Favorite, StoreError> {
        let favorite = self
            .api
            .create_favorite(&NewFavorite { user_id, poem_id })
            .await?;
        log::info!("User {user_id} favorited poem {poem_id}");
        self.fetch_favorites().await?;
        Ok(favorite)
    }

    /// Deletes the first favorite of `poem_id` by `user_id`.
    ///
    /// # Errors
    ///
    /// [`StoreError::FavoriteNotFound`] when no such favorite is loaded.
    pub async fn unfavorite(&self, user_id: UserId, poem_id: PoemId) -> Result<(), StoreError> {
        let id = self
            .state()
            .find_favorite(user_id, poem_id)
            .map(|favorite| favorite.id)
            .ok_or(StoreError::FavoriteNotFound { user_id, poem_id })?;

        self.api.delete_favorite(id).await?;
        log::info!("User {user_id} unfavorited poem {poem_id}");
        self.fetch_favorites().await
    }

    /// Publishes a poem and returns it once the poem list has been refreshed.
    pub async fn create_poem(&self, poem: &NewPoem) -> Result<Poem, StoreError> {
        let created = self.api.create_poem(poem).await?;
        log::info!("Created poem {} \"{}\"", created.id, created.title);
        self.fetch_poems().await?;
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::ApiError;
    use crate::data::{NewPoem, User};
    use crate::errors::StoreError;
    use crate::id::{PoemId, UserId};
    use crate::services::{Endpoint, MemoryPoemService};
    use crate::session::MemoryTokenStore;
    use crate::store::Store;
    use futures::executor::block_on;

    struct Fixture {
        store: Store<MemoryPoemService, MemoryTokenStore>,
        basho: User,
        issa: User,
        poem_id: PoemId,
    }

    fn fixture() -> Fixture {
        let service = MemoryPoemService::new();
        let (basho, token) = service.add_user("basho", "frog").unwrap();
        let (issa, _) = service.add_user("issa", "snail").unwrap();
        let buson = service.add_user("buson", "lantern").unwrap().0;
        service.add_relationship(buson.id, issa.id);
        let poem = service.add_poem(issa.id, "Snail", "O snail, climb Mount Fuji");
        service.add_favorite(buson.id, poem.id);

        let store = Store::new(service, MemoryTokenStore::with_token(token));
        block_on(store.load_all()).unwrap();
        Fixture {
            store,
            basho,
            issa,
            poem_id: poem.id,
        }
    }

    #[test]
    fn test_follow_then_unfollow_restores_relationship_count() {
        let Fixture {
            store, basho, issa, ..
        } = fixture();
        let before = store.state().relationships().len();

        let created = block_on(store.follow(basho.id, issa.id)).unwrap();
        assert_eq!(store.state().relationships().len(), before + 1);
        assert!(store.state().is_following(basho.id, issa.id));
        assert_eq!(created.follower_id, basho.id);

        block_on(store.unfollow(basho.id, issa.id)).unwrap();
        assert_eq!(store.state().relationships().len(), before);
        assert!(!store.state().is_following(basho.id, issa.id));
    }

    #[test]
    fn test_favorite_then_unfavorite_restores_favorite_count() {
        let Fixture {
            store,
            basho,
            poem_id,
            ..
        } = fixture();
        let before = store.state().favorites().len();

        block_on(store.favorite(basho.id, poem_id)).unwrap();
        assert_eq!(store.state().favorites().len(), before + 1);
        assert_eq!(store.state().favorite_count(poem_id), 2);

        block_on(store.unfavorite(basho.id, poem_id)).unwrap();
        assert_eq!(store.state().favorites().len(), before);
        assert!(!store.state().is_favorited(basho.id, poem_id));
    }

    #[test]
    fn test_unfollow_unknown_pair_is_an_error() {
        let Fixture {
            store, basho, issa, ..
        } = fixture();
        let calls = store.api().calls(Endpoint::Relationships);

        let result = block_on(store.unfollow(basho.id, issa.id));

        assert!(matches!(
            result,
            Err(StoreError::RelationshipNotFound { follower_id, followed_id })
                if follower_id == basho.id && followed_id == issa.id
        ));
        assert_eq!(store.api().calls(Endpoint::Relationships), calls);
    }

    #[test]
    fn test_unfavorite_unknown_pair_is_an_error() {
        let Fixture {
            store, basho, ..
        } = fixture();

        let result = block_on(store.unfavorite(basho.id, PoemId::new(404)));

        assert!(matches!(result, Err(StoreError::FavoriteNotFound { .. })));
    }

    #[test]
    fn test_failed_follow_leaves_relationships_alone() {
        let Fixture {
            store, basho, issa, ..
        } = fixture();
        store.api().fail(Endpoint::Relationships);

        let result = block_on(store.follow(basho.id, issa.id));

        assert!(matches!(
            result,
            Err(StoreError::Api(ApiError::InternalServerError))
        ));
        assert_eq!(store.state().relationships().len(), 1);
    }

    #[test]
    fn test_create_poem_refreshes_poems() {
        let Fixture {
            store, basho, ..
        } = fixture();

        let poem = block_on(store.create_poem(&NewPoem {
            title: "Autumn".to_string(),
            content: "This road: no one goes down it".to_string(),
            user_id: basho.id,
        }))
        .unwrap();

        assert_eq!(store.state().poems().len(), 2);
        assert_eq!(store.state().poem(poem.id).map(|p| p.user_id), Some(basho.id));
        assert_eq!(store.state().poems_by(basho.id).len(), 1);
    }

    #[test]
    fn test_create_poem_rejects_blank_poem() {
        let Fixture { store, .. } = fixture();

        let result = block_on(store.create_poem(&NewPoem {
            title: " ".to_string(),
            content: String::new(),
            user_id: UserId::new(1),
        }));

        assert!(matches!(result, Err(StoreError::Api(ApiError::BadRequest(_)))));
        assert_eq!(store.state().poems().len(), 1);
    }
}
