use yew::prelude::*;

use stanza::id::PoemId;

use crate::components::render_poem;
use crate::hooks::use_actions;
use crate::providers::{StoreContext, use_store};

#[derive(Properties, PartialEq)]
pub struct PoemProps {
    pub id: PoemId,
}

#[function_component(PoemPage)]
pub fn poem_page(props: &PoemProps) -> Html {
    let StoreContext { store, .. } = use_store();
    let actions = use_actions();
    let state = store.state();

    let Some(viewer_id) = state.current_user_id() else {
        return html! {};
    };

    match state.poem(props.id) {
        Some(poem) => html! {
            <div class="max-w-3xl mx-auto p-8">
                { render_poem(&state, viewer_id, poem, &actions, true) }
            </div>
        },
        None => html! {
            <div class="max-w-3xl mx-auto p-8 text-center">
                <p class="text-gray-500 mb-4">{ "This poem does not exist or was removed." }</p>
                <button class="text-blue-700 hover:underline cursor-pointer" onclick={actions.show_poems.reform(|_| ())}>
                    { "Back to all poems" }
                </button>
            </div>
        },
    }
}
