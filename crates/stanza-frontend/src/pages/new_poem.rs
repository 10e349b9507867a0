use yew::prelude::*;

use stanza::{async_callback, data::NewPoem};

use crate::components::{ErrorBanner, TextArea, TextField, bind};
use crate::hooks::use_actions;
use crate::providers::{StoreContext, use_store};

#[function_component(NewPoemPage)]
pub fn new_poem_page() -> Html {
    let StoreContext { store, .. } = use_store();
    let actions = use_actions();
    let author_id = store.state().current_user_id();

    let title = use_state(String::new);
    let content = use_state(String::new);
    let loading = use_state(|| false);
    let error_msg = use_state(|| None::<String>);

    let is_valid = !title.trim().is_empty() && !content.trim().is_empty();

    let show_poem = actions.show_poem.clone();
    let on_submit = async_callback!([store, title, content, loading, error_msg, show_poem] |e: SubmitEvent| {
        e.prevent_default();

        let Some(user_id) = author_id else {
            error_msg.set(Some("Log in to publish a poem".to_string()));
            return;
        };
        if title.trim().is_empty() || content.trim().is_empty() {
            error_msg.set(Some("A poem needs a title and some lines".to_string()));
            return;
        }
        if *loading {
            return;
        }

        loading.set(true);
        error_msg.set(None);

        let poem = NewPoem {
            title: title.trim().to_string(),
            content: content.trim_end().to_string(),
            user_id,
        };

        match store.create_poem(&poem).await {
            Ok(created) => {
                loading.set(false);
                title.set(String::new());
                content.set(String::new());
                show_poem.emit(created.id);
            }
            Err(err) => {
                loading.set(false);
                error_msg.set(Some(format!("Failed to publish poem: {err}")));
            }
        }
    });

    html! {
        <div class="max-w-2xl mx-auto p-8">
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{ "Write a poem" }</h1>

            <form onsubmit={on_submit} class="space-y-4 bg-white border border-gray-200 rounded-lg p-6">
                <TextField
                    id="poem-title"
                    label="Title"
                    placeholder="Untitled"
                    value={(*title).clone()}
                    oninput={bind(&title)}
                    disabled={*loading}
                />
                <TextArea
                    id="poem-content"
                    label="Poem"
                    rows={12}
                    value={(*content).clone()}
                    oninput={bind(&content)}
                    disabled={*loading}
                />

                <ErrorBanner message={(*error_msg).clone()} />

                <div class="flex justify-end">
                    <button
                        type="submit"
                        class="px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled={*loading || !is_valid}
                    >
                        { if *loading { "Publishing..." } else { "Publish" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
