use std::future::Future;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use stanza::errors::StoreError;
use stanza::id::{PoemId, UserId};
use stanza::log;

use crate::providers::{StoreContext, use_store};
use crate::routes::Route;

/// Navigation and mutation callbacks handed down to views.
#[derive(Clone, PartialEq)]
pub struct Actions {
    pub show_poem: Callback<PoemId>,
    pub show_user: Callback<UserId>,
    pub profile: Callback<()>,
    pub show_poems: Callback<()>,
    pub show_users: Callback<()>,
    pub make_poem: Callback<()>,
    pub logout: Callback<()>,
    /// `(follower_id, followed_id)`
    pub follow: Callback<(UserId, UserId)>,
    /// `(follower_id, followed_id)`
    pub unfollow: Callback<(UserId, UserId)>,
    /// `(user_id, poem_id)`
    pub favorite: Callback<(UserId, PoemId)>,
    /// `(user_id, poem_id)`
    pub unfavorite: Callback<(UserId, PoemId)>,
}

/// Runs a mutation in the background, logging instead of reporting failure.
fn fire_and_forget<F>(what: &'static str, task: F)
where
    F: Future<Output = Result<(), StoreError>> + 'static,
{
    spawn_local(async move {
        if let Err(err) = task.await {
            log::error!("Failed to {what}: {err}");
        }
    });
}

#[hook]
pub fn use_actions() -> Actions {
    let StoreContext { store, .. } = use_store();
    let navigator = use_navigator().expect("use_actions must be used within a BrowserRouter");

    let navigate_to = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |_: ()| navigator.push(&route))
    };

    let show_poem = {
        let store = store.clone();
        let navigator = navigator.clone();
        Callback::from(move |id: PoemId| {
            navigator.push(&Route::Poem { id });
            let store = store.clone();
            spawn_local(async move {
                if let Err(err) = store.fetch_poems().await {
                    log::warn!("Showing poem {id} with stale poems: {err}");
                }
            });
        })
    };

    let show_user = {
        let navigator = navigator.clone();
        Callback::from(move |id: UserId| navigator.push(&Route::User { id }))
    };

    let logout = {
        let store = store.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: ()| {
            store.end_session();
            navigator.push(&Route::Login);
        })
    };

    let follow = {
        let store = store.clone();
        Callback::from(move |(follower_id, followed_id): (UserId, UserId)| {
            let store = store.clone();
            fire_and_forget("follow user", async move {
                store.follow(follower_id, followed_id).await.map(|_| ())
            });
        })
    };

    let unfollow = {
        let store = store.clone();
        Callback::from(move |(follower_id, followed_id): (UserId, UserId)| {
            let store = store.clone();
            fire_and_forget("unfollow user", async move {
                store.unfollow(follower_id, followed_id).await
            });
        })
    };

    let favorite = {
        let store = store.clone();
        Callback::from(move |(user_id, poem_id): (UserId, PoemId)| {
            let store = store.clone();
            fire_and_forget("favorite poem", async move {
                store.favorite(user_id, poem_id).await.map(|_| ())
            });
        })
    };

    let unfavorite = {
        let store = store.clone();
        Callback::from(move |(user_id, poem_id): (UserId, PoemId)| {
            let store = store.clone();
            fire_and_forget("unfavorite poem", async move {
                store.unfavorite(user_id, poem_id).await
            });
        })
    };

    Actions {
        show_poem,
        show_user,
        profile: navigate_to(Route::Profile),
        show_poems: navigate_to(Route::Poems),
        show_users: navigate_to(Route::Users),
        make_poem: navigate_to(Route::NewPoem),
        logout,
        follow,
        unfollow,
        favorite,
        unfavorite,
    }
}
