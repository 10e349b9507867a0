//! The root application store.
//!
//! [`Store`] owns the [`AppState`] together with the backend service and the
//! token store. Views read the state through [`Store::state`] and change it
//! only through the session, loader and mutation methods, which are split
//! across [`crate::session`], [`crate::loader`] and [`crate::mutations`].

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::session::TokenStore;
use crate::services::PoemService;
use crate::state::{AppState, StateAction};

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(usize);

type Listener = Rc<dyn Fn()>;

pub struct Store<A, T> {
    pub(crate) api: A,
    pub(crate) tokens: T,
    state: RefCell<AppState>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_listener: RefCell<usize>,
}

impl<A, T> Store<A, T>
where
    A: PoemService,
    T: TokenStore,
{
    pub fn new(api: A, tokens: T) -> Self {
        Self {
            api,
            tokens,
            state: RefCell::new(AppState::default()),
            listeners: RefCell::new(Vec::new()),
            next_listener: RefCell::new(0),
        }
    }

    /// Borrows the current state. Do not hold the borrow across an `.await`.
    pub fn state(&self) -> Ref<'_, AppState> {
        self.state.borrow()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn tokens(&self) -> &T {
        &self.tokens
    }

    /// Registers `listener` to run after every state change.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> ListenerId {
        let mut next = self.next_listener.borrow_mut();
        let id = ListenerId(*next);
        *next += 1;
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) {
        self.listeners
            .borrow_mut()
            .retain(|(listener_id, _)| *listener_id != id);
    }

    /// Applies `action` and notifies listeners.
    pub(crate) fn dispatch(&self, action: StateAction) {
        self.state.borrow_mut().apply(action);

        // Listeners may read the state or subscribe, so release both borrows first.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::User;
    use crate::id::UserId;
    use crate::session::MemoryTokenStore;
    use crate::services::MemoryPoemService;
    use std::cell::Cell;

    #[test]
    fn test_listeners_run_on_dispatch_until_unsubscribed() {
        let store = Store::new(MemoryPoemService::new(), MemoryTokenStore::default());
        let hits = Rc::new(Cell::new(0));

        let id = {
            let hits = hits.clone();
            store.subscribe(move || hits.set(hits.get() + 1))
        };

        store.dispatch(StateAction::SetUsers(vec![User {
            id: UserId::new(1),
            username: "basho".to_string(),
            name: None,
            bio: None,
            avatar_url: None,
        }]));
        assert_eq!(hits.get(), 1);
        assert_eq!(store.state().users().len(), 1);

        store.unsubscribe(id);
        store.dispatch(StateAction::Reset);
        assert_eq!(hits.get(), 1);
        assert!(store.state().users.is_none());
    }
}
