use yew::prelude::*;

use crate::components::FollowButton;
use crate::hooks::use_actions;
use crate::providers::{StoreContext, use_store};

#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let StoreContext { store, .. } = use_store();
    let actions = use_actions();
    let state = store.state();
    let viewer_id = state.current_user_id();

    let Some(users) = state.users.as_ref() else {
        return html! {
            <div class="p-8 text-center text-gray-600">{ "Loading poets..." }</div>
        };
    };

    html! {
        <div class="max-w-3xl mx-auto p-8 space-y-4">
            <h1 class="text-3xl font-bold text-gray-900">{ "Poets" }</h1>
            <ul class="divide-y divide-gray-200 bg-white border border-gray-200 rounded-xl">
                {
                    users.iter().map(|user| {
                        let user_id = user.id;
                        html! {
                            <li key={user.id.to_string()} class="flex items-center justify-between px-6 py-4">
                                <button
                                    class="text-left cursor-pointer"
                                    onclick={actions.show_user.reform(move |_: MouseEvent| user_id)}
                                >
                                    <span class="block font-medium text-gray-900">{ user.display_name() }</span>
                                    <span class="block text-sm text-gray-500">
                                        { format!("@{} · {} poems", user.username, state.poems_by(user.id).len()) }
                                    </span>
                                </button>
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
                            </li>
                        }
                    }).collect::<Html>()
                }
            </ul>
        </div>
    }
}
