use yew::prelude::*;

use crate::hooks::use_actions;
use crate::pages::user::render_profile;
use crate::providers::{StoreContext, use_store};

/// The signed-in user's own profile.
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let StoreContext { store, .. } = use_store();
    let actions = use_actions();
    let state = store.state();

    match &state.current_user {
        Some(me) => render_profile(&state, Some(me.id), me, &actions),
        None => html! {},
    }
}
