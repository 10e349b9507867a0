use yew::prelude::*;

use crate::components::render_poem;
use crate::hooks::use_actions;
use crate::providers::{StoreContext, use_store};

/// Every poem, newest first.
#[function_component(PoemsPage)]
pub fn poems_page() -> Html {
    let StoreContext { store, .. } = use_store();
    let actions = use_actions();
    let state = store.state();

    let Some(viewer_id) = state.current_user_id() else {
        return html! {};
    };

    html! {
        <div class="max-w-3xl mx-auto p-8 space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold text-gray-900">{ "Poems" }</h1>
                <button
                    class="px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700"
                    onclick={actions.make_poem.reform(|_| ())}
                >
                    { "Write a poem" }
                </button>
            </div>
            {
                if state.poems().is_empty() {
                    html! { <p class="text-gray-500">{ "No poems yet. Be the first to write one." }</p> }
                } else {
                    state
                        .poems()
                        .iter()
                        .rev()
                        .map(|poem| render_poem(&state, viewer_id, poem, &actions, false))
                        .collect::<Html>()
                }
            }
        </div>
    }
}
