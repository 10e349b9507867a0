use yew::prelude::*;

use stanza::state::Gate;

use crate::providers::use_store;

#[derive(Properties, PartialEq)]
pub struct GatedProps {
    pub gate: Gate,
    pub children: Children,
}

/// Renders its children only once the store admits `gate`, nothing before.
#[function_component(Gated)]
pub fn gated(props: &GatedProps) -> Html {
    let context = use_store();
    let admitted = context.store.state().admits(props.gate);

    if admitted {
        html! { <>{ props.children.clone() }</> }
    } else {
        html! {}
    }
}
