use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

const INPUT_CLASSES: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent";

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub kind: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = props.oninput.reform(|e: InputEvent| {
        e.target_dyn_into::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    });

    html! {
        <div>
            <label for={props.id.clone()} class="block text-sm font-medium text-gray-700 mb-1">
                { props.label.clone() }
            </label>
            <input
                id={props.id.clone()}
                type={props.kind.clone()}
                class={INPUT_CLASSES}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                {oninput}
                disabled={props.disabled}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<String>,
    #[prop_or(8)]
    pub rows: u32,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(TextArea)]
pub fn text_area(props: &TextAreaProps) -> Html {
    let oninput = props.oninput.reform(|e: InputEvent| {
        e.target_dyn_into::<HtmlTextAreaElement>()
            .map(|area| area.value())
            .unwrap_or_default()
    });

    html! {
        <div>
            <label for={props.id.clone()} class="block text-sm font-medium text-gray-700 mb-1">
                { props.label.clone() }
            </label>
            <textarea
                id={props.id.clone()}
                class={classes!(INPUT_CLASSES, "font-serif")}
                rows={props.rows.to_string()}
                value={props.value.clone()}
                {oninput}
                disabled={props.disabled}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: Option<String>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class="p-3 bg-red-50 border border-red-200 rounded-md">
                <p class="text-sm text-red-700">{ message }</p>
            </div>
        },
        None => html! {},
    }
}

/// Binds a `use_state` string to an input's `oninput`.
pub fn bind(state: &UseStateHandle<String>) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |value: String| state.set(value))
}
