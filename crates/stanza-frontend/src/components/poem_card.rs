use yew::prelude::*;

use stanza::data::{Poem, User};
use stanza::id::UserId;
use stanza::state::AppState;

use crate::components::{FavoriteButton, FollowButton};
use crate::hooks::Actions;

const CARD_CLASSES: &str = "bg-white border border-gray-200 rounded-xl p-6 shadow-sm";

#[derive(Properties, PartialEq)]
pub struct PoemCardProps {
    pub poem: Poem,
    pub author: Option<User>,
    pub viewer_id: UserId,
    pub following_author: Option<bool>,
    pub favorited: Option<bool>,
    pub favorite_count: usize,
    pub actions: Actions,
    /// Show the whole poem instead of the first lines.
    #[prop_or(false)]
    pub full: bool,
}

const PREVIEW_LINES: usize = 4;

fn preview(content: &str) -> String {
    let mut lines = content.lines();
    let shown: Vec<&str> = lines.by_ref().take(PREVIEW_LINES).collect();
    let mut preview = shown.join("\n");
    if lines.next().is_some() {
        preview.push_str("\n…");
    }
    preview
}

#[function_component(PoemCard)]
pub fn poem_card(props: &PoemCardProps) -> Html {
    let poem = &props.poem;
    let actions = &props.actions;
    let poem_id = poem.id;
    let author_id = poem.user_id;

    let author_name = props
        .author
        .as_ref()
        .map(|author| author.display_name().to_string())
        .unwrap_or_else(|| format!("User {author_id}"));

    let body = if props.full {
        poem.content.clone()
    } else {
        preview(&poem.content)
    };

    html! {
        <article class={CARD_CLASSES}>
            <header class="flex items-start justify-between mb-3">
                <div>
                    <h2
                        class="text-xl font-semibold text-gray-900 hover:text-blue-700 cursor-pointer"
                        onclick={actions.show_poem.reform(move |_: MouseEvent| poem_id)}
                    >
                        { &poem.title }
                    </h2>
                    <button
                        class="text-sm text-gray-600 hover:underline cursor-pointer"
                        onclick={actions.show_user.reform(move |_: MouseEvent| author_id)}
                    >
                        { format!("by {author_name}") }
                    </button>
                </div>
                <FollowButton
                    viewer_id={props.viewer_id}
                    user_id={author_id}
                    following={props.following_author}
                    on_follow={actions.follow.clone()}
                    on_unfollow={actions.unfollow.clone()}
                />
            </header>
            <p class="whitespace-pre-line font-serif text-gray-800 leading-relaxed">{ body }</p>
            <footer class="mt-4 flex items-center justify-between">
                <FavoriteButton
                    user_id={props.viewer_id}
                    poem_id={poem_id}
                    favorited={props.favorited}
                    count={props.favorite_count}
                    on_favorite={actions.favorite.clone()}
                    on_unfavorite={actions.unfavorite.clone()}
                />
                {
                    if let Some(created_at) = &poem.created_at {
                        html! { <span class="text-xs text-gray-500">{ created_at }</span> }
                    } else {
                        html! {}
                    }
                }
            </footer>
        </article>
    }
}

/// A [`PoemCard`] for `poem` as seen by `viewer_id`, filled in from `state`.
pub fn render_poem(
    state: &AppState,
    viewer_id: UserId,
    poem: &Poem,
    actions: &Actions,
    full: bool,
) -> Html {
    html! {
        <PoemCard
            key={poem.id.to_string()}
            poem={poem.clone()}
            author={state.author_of(poem).cloned()}
            viewer_id={viewer_id}
            following_author={state.follow_status(viewer_id, poem.user_id)}
            favorited={state.favorite_status(viewer_id, poem.id)}
            favorite_count={state.favorite_count(poem.id)}
            actions={actions.clone()}
            full={full}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_long_poems() {
        let poem = "one\ntwo\nthree\nfour\nfive";
        assert_eq!(preview(poem), "one\ntwo\nthree\nfour\n…");
    }

    #[test]
    fn test_preview_keeps_short_poems() {
        assert_eq!(preview("an old pond\na frog jumps in"), "an old pond\na frog jumps in");
    }
}
