use yew::prelude::*;

use stanza::id::{PoemId, UserId};

#[derive(Properties, PartialEq)]
pub struct FavoriteButtonProps {
    pub user_id: UserId,
    pub poem_id: PoemId,
    /// `None` while the favorites are unknown; only the count is shown.
    pub favorited: Option<bool>,
    pub count: usize,
    pub on_favorite: Callback<(UserId, PoemId)>,
    pub on_unfavorite: Callback<(UserId, PoemId)>,
}

#[function_component(FavoriteButton)]
pub fn favorite_button(props: &FavoriteButtonProps) -> Html {
    let Some(favorited) = props.favorited else {
        return html! {
            <span class="px-2 py-1 text-sm text-gray-400">{ format!("♡ {}", props.count) }</span>
        };
    };

    let pair = (props.user_id, props.poem_id);
    let onclick = if favorited {
        props.on_unfavorite.reform(move |_: MouseEvent| pair)
    } else {
        props.on_favorite.reform(move |_: MouseEvent| pair)
    };

    let classes = classes!(
        "flex", "items-center", "space-x-1", "px-2", "py-1", "text-sm", "rounded-md",
        if favorited { "text-red-600 hover:bg-red-50" } else { "text-gray-500 hover:bg-gray-100" }
    );

    html! {
        <button class={classes} {onclick} title={if favorited { "Unfavorite" } else { "Favorite" }}>
            <span>{ if favorited { "♥" } else { "♡" } }</span>
            <span>{ props.count }</span>
        </button>
    }
}
