use yew::prelude::*;

use stanza::data::{Poem, User};
use stanza::id::UserId;
use stanza::state::AppState;

use crate::components::{FollowButton, render_poem};
use crate::hooks::{Actions, use_actions};
use crate::providers::{StoreContext, use_store};

#[derive(Properties, PartialEq)]
pub struct UserProps {
    pub id: UserId,
}

/// Header with follow counts followed by the user's poems and favorites.
pub(crate) fn render_profile(
    state: &AppState,
    viewer_id: Option<UserId>,
    user: &User,
    actions: &Actions,
) -> Html {
    let poems = state.poems_by(user.id);
    let favorites = state.favorite_poems_of(user.id);
    let followers = state.followers_of(user.id).len();
    let following = state.following_of(user.id).len();

    let render_list = |poems: Vec<&Poem>, empty: &'static str| -> Html {
        match viewer_id {
            _ if poems.is_empty() => html! { <p class="text-gray-500">{ empty }</p> },
            Some(viewer_id) => poems
                .into_iter()
                .map(|poem| render_poem(state, viewer_id, poem, actions, false))
                .collect::<Html>(),
            None => poems
                .into_iter()
                .map(|poem| {
                    let poem_id = poem.id;
                    html! {
                        <button
                            key={poem.id.to_string()}
                            class="block text-left text-blue-700 hover:underline cursor-pointer"
                            onclick={actions.show_poem.reform(move |_: MouseEvent| poem_id)}
                        >
                            { &poem.title }
                        </button>
                    }
                })
                .collect::<Html>(),
        }
    };

    html! {
        <div class="max-w-3xl mx-auto p-8 space-y-6">
            <div class="bg-white border border-gray-200 rounded-xl p-6 flex items-start justify-between">
                <div>
                    <h1 class="text-3xl font-bold text-gray-900">{ user.display_name() }</h1>
                    <p class="text-sm text-gray-500">{ format!("@{}", user.username) }</p>
                    {
                        if let Some(bio) = &user.bio {
                            html! { <p class="mt-3 text-gray-700">{ bio }</p> }
                        } else {
                            html! {}
                        }
                    }
                    <p class="mt-3 text-sm text-gray-600">
                        { format!("{} poems · {followers} followers · {following} following", poems.len()) }
                    </p>
                </div>
                {
                    if let Some(viewer_id) = viewer_id {
                        html! {
                            <FollowButton
                                viewer_id={viewer_id}
                                user_id={user.id}
                                following={state.follow_status(viewer_id, user.id)}
                                on_follow={actions.follow.clone()}
                                on_unfollow={actions.unfollow.clone()}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <section class="space-y-4">
                <h2 class="text-xl font-semibold text-gray-900">{ "Poems" }</h2>
                { render_list(poems.clone(), "No poems yet.") }
            </section>

            <section class="space-y-4">
                <h2 class="text-xl font-semibold text-gray-900">{ "Favorites" }</h2>
                { render_list(favorites, "No favorites yet.") }
            </section>
        </div>
    }
}

#[function_component(UserPage)]
pub fn user_page(props: &UserProps) -> Html {
    let StoreContext { store, .. } = use_store();
    let actions = use_actions();
    let state = store.state();

    if state.users.is_none() {
        return html! {
            <div class="p-8 text-center text-gray-600">{ "Loading poets..." }</div>
        };
    }

    match state.user(props.id) {
        Some(user) => render_profile(&state, state.current_user_id(), user, &actions),
        None => html! {
            <div class="max-w-3xl mx-auto p-8 text-center">
                <p class="text-gray-500 mb-4">{ "No poet with that id." }</p>
                <button class="text-blue-700 hover:underline cursor-pointer" onclick={actions.show_users.reform(|_| ())}>
                    { "Back to all poets" }
                </button>
            </div>
        },
    }
}
