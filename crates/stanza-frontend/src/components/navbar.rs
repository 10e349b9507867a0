use yew::prelude::*;

use crate::hooks::Actions;

const LINK_CLASSES: &str = "px-3 py-2 text-sm font-medium text-gray-700 hover:text-blue-700 hover:bg-gray-100 rounded-md cursor-pointer";

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub actions: Actions,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let actions = &props.actions;

    html! {
        <nav class="bg-white border-b border-gray-200">
            <div class="max-w-4xl mx-auto px-4 flex items-center justify-between h-14">
                <button class="text-lg font-semibold text-gray-900 cursor-pointer" onclick={actions.show_poems.reform(|_| ())}>
                    { "Stanza" }
                </button>
                <div class="flex items-center space-x-1">
                    <button class={LINK_CLASSES} onclick={actions.show_poems.reform(|_| ())}>{ "Poems" }</button>
                    <button class={LINK_CLASSES} onclick={actions.show_users.reform(|_| ())}>{ "Poets" }</button>
                    <button class={LINK_CLASSES} onclick={actions.make_poem.reform(|_| ())}>{ "Write" }</button>
                    <button class={LINK_CLASSES} onclick={actions.profile.reform(|_| ())}>{ "Profile" }</button>
                    <button
                        class="ml-2 px-3 py-2 text-sm font-medium text-red-700 hover:bg-red-50 rounded-md cursor-pointer"
                        onclick={actions.logout.reform(|_| ())}
                    >
                        { "Log out" }
                    </button>
                </div>
            </div>
        </nav>
    }
}
