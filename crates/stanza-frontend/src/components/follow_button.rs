use yew::prelude::*;

use stanza::id::UserId;

#[derive(Properties, PartialEq)]
pub struct FollowButtonProps {
    pub viewer_id: UserId,
    pub user_id: UserId,
    /// `None` while the viewer's relationships are unknown.
    pub following: Option<bool>,
    pub on_follow: Callback<(UserId, UserId)>,
    pub on_unfollow: Callback<(UserId, UserId)>,
}

/// Follow/unfollow toggle. Renders nothing for the viewer's own account or
/// while the relationships are not loaded.
#[function_component(FollowButton)]
pub fn follow_button(props: &FollowButtonProps) -> Html {
    let Some(following) = props.following else {
        return html! {};
    };
    if props.viewer_id == props.user_id {
        return html! {};
    }

    let pair = (props.viewer_id, props.user_id);
    let (label, classes, onclick) = if following {
        (
            "Unfollow",
            "px-3 py-1 text-xs font-medium text-gray-700 bg-white border border-gray-300 rounded-md hover:bg-gray-50",
            props.on_unfollow.reform(move |_: MouseEvent| pair),
        )
    } else {
        (
            "Follow",
            "px-3 py-1 text-xs font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700",
            props.on_follow.reform(move |_: MouseEvent| pair),
        )
    };

    html! {
        <button class={classes} {onclick}>{ label }</button>
    }
}
