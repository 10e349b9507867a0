//! Client-side application state.
//!
//! Every slice starts out as `None` and becomes `Some` once its fetch has
//! succeeded, even when the backend returned an empty collection. Views are
//! gated on that distinction rather than on emptiness.

use crate::data::{CurrentUser, Favorite, Poem, Relationship, User};
use crate::id::{PoemId, UserId};

/// What a view needs loaded before it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Open,
    CurrentUser,
    /// All five slices.
    Collections,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub users: Option<Vec<User>>,
    pub current_user: Option<CurrentUser>,
    pub relationships: Option<Vec<Relationship>>,
    pub poems: Option<Vec<Poem>>,
    pub favorites: Option<Vec<Favorite>>,
}

/// A single state replacement. Fetches produce one of these on completion.
#[derive(Debug, Clone, PartialEq)]
pub enum StateAction {
    SetUsers(Vec<User>),
    SetCurrentUser(CurrentUser),
    SetRelationships(Vec<Relationship>),
    SetPoems(Vec<Poem>),
    SetFavorites(Vec<Favorite>),
    Reset,
}

impl AppState {
    pub fn apply(&mut self, action: StateAction) {
        match action {
            StateAction::SetUsers(users) => self.users = Some(users),
            StateAction::SetCurrentUser(user) => self.current_user = Some(user),
            StateAction::SetRelationships(relationships) => {
                self.relationships = Some(relationships)
            }
            StateAction::SetPoems(poems) => self.poems = Some(poems),
            StateAction::SetFavorites(favorites) => self.favorites = Some(favorites),
            StateAction::Reset => *self = Self::default(),
        }
    }

    /// True once all five slices have been loaded.
    pub fn is_ready(&self) -> bool {
        self.users.is_some()
            && self.current_user.is_some()
            && self.relationships.is_some()
            && self.poems.is_some()
            && self.favorites.is_some()
    }

    /// True once the current user is known and every collection is loaded
    /// and non-empty.
    pub fn has_collections(&self) -> bool {
        let filled = |len: Option<usize>| len.is_some_and(|len| len > 0);
        self.current_user.is_some()
            && filled(self.users.as_ref().map(Vec::len))
            && filled(self.relationships.as_ref().map(Vec::len))
            && filled(self.poems.as_ref().map(Vec::len))
            && filled(self.favorites.as_ref().map(Vec::len))
    }

    pub fn admits(&self, gate: Gate) -> bool {
        match gate {
            Gate::Open => true,
            Gate::CurrentUser => self.current_user.is_some(),
            Gate::Collections => self.has_collections(),
        }
    }

    pub fn users(&self) -> &[User] {
        self.users.as_deref().unwrap_or_default()
    }

    pub fn relationships(&self) -> &[Relationship] {
        self.relationships.as_deref().unwrap_or_default()
    }

    pub fn poems(&self) -> &[Poem] {
        self.poems.as_deref().unwrap_or_default()
    }

    pub fn favorites(&self) -> &[Favorite] {
        self.favorites.as_deref().unwrap_or_default()
    }

    pub fn current_user_id(&self) -> Option<UserId> {
        self.current_user.as_ref().map(|user| user.id)
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users().iter().find(|user| user.id == id)
    }

    pub fn poem(&self, id: PoemId) -> Option<&Poem> {
        self.poems().iter().find(|poem| poem.id == id)
    }

    pub fn author_of(&self, poem: &Poem) -> Option<&User> {
        self.user(poem.user_id)
    }

    /// First relationship from `follower_id` to `followed_id`.
    pub fn find_relationship(
        &self,
        follower_id: UserId,
        followed_id: UserId,
    ) -> Option<&Relationship> {
        self.relationships()
            .iter()
            .find(|r| r.follower_id == follower_id && r.followed_id == followed_id)
    }

    /// First favorite of `poem_id` by `user_id`.
    pub fn find_favorite(&self, user_id: UserId, poem_id: PoemId) -> Option<&Favorite> {
        self.favorites()
            .iter()
            .find(|f| f.user_id == user_id && f.poem_id == poem_id)
    }

    pub fn is_following(&self, follower_id: UserId, followed_id: UserId) -> bool {
        self.find_relationship(follower_id, followed_id).is_some()
    }

    pub fn is_favorited(&self, user_id: UserId, poem_id: PoemId) -> bool {
        self.find_favorite(user_id, poem_id).is_some()
    }

    /// Whether `follower_id` follows `followed_id`, or `None` while the
    /// relationships are not loaded and the answer is unknown.
    pub fn follow_status(&self, follower_id: UserId, followed_id: UserId) -> Option<bool> {
        self.relationships
            .as_ref()
            .map(|_| self.is_following(follower_id, followed_id))
    }

    /// Like [`AppState::follow_status`], over the favorites.
    pub fn favorite_status(&self, user_id: UserId, poem_id: PoemId) -> Option<bool> {
        self.favorites
            .as_ref()
            .map(|_| self.is_favorited(user_id, poem_id))
    }

    /// Users following `user_id`.
    pub fn followers_of(&self, user_id: UserId) -> Vec<&User> {
        self.relationships()
            .iter()
            .filter(|r| r.followed_id == user_id)
            .filter_map(|r| self.user(r.follower_id))
            .collect()
    }

    /// Users `user_id` follows.
    pub fn following_of(&self, user_id: UserId) -> Vec<&User> {
        self.relationships()
            .iter()
            .filter(|r| r.follower_id == user_id)
            .filter_map(|r| self.user(r.followed_id))
            .collect()
    }

    pub fn poems_by(&self, user_id: UserId) -> Vec<&Poem> {
        self.poems()
            .iter()
            .filter(|poem| poem.user_id == user_id)
            .collect()
    }

    pub fn favorite_poems_of(&self, user_id: UserId) -> Vec<&Poem> {
        self.favorites()
            .iter()
            .filter(|f| f.user_id == user_id)
            .filter_map(|f| self.poem(f.poem_id))
            .collect()
    }

    pub fn favorite_count(&self, poem_id: PoemId) -> usize {
        self.favorites()
            .iter()
            .filter(|f| f.poem_id == poem_id)
            .count()
    }
}
