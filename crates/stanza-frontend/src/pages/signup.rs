use yew::prelude::*;
use yew_router::prelude::*;

use stanza::session::TokenStore;
use stanza::{async_callback, data::SignupRequest, log};

use crate::components::{ErrorBanner, TextArea, TextField, bind};
use crate::providers::{StoreContext, use_store};
use crate::routes::Route;

const MIN_PASSWORD_LENGTH: usize = 6;

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let StoreContext { store, .. } = use_store();
    let navigator = use_navigator();

    let username = use_state(String::new);
    let name = use_state(String::new);
    let bio = use_state(String::new);
    let password = use_state(String::new);

    let loading = use_state(|| false);
    let error_msg = use_state(|| None::<String>);

    let is_valid = !username.trim().is_empty() && password.len() >= MIN_PASSWORD_LENGTH;

    let on_submit = async_callback!([store, navigator, username, name, bio, password, loading, error_msg] |e: SubmitEvent| {
        e.prevent_default();

        if username.trim().is_empty() {
            error_msg.set(Some("Username is required".to_string()));
            return;
        }
        if password.len() < MIN_PASSWORD_LENGTH {
            error_msg.set(Some(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
            return;
        }
        if *loading {
            return;
        }

        loading.set(true);
        error_msg.set(None);

        let signup = SignupRequest {
            username: username.trim().to_string(),
            password: (*password).clone(),
            name: optional(&name),
            bio: optional(&bio),
        };

        match store.signup(&signup).await {
            Ok(()) => {
                loading.set(false);
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Poems);
                }
            }
            Err(err) if store.tokens().load().is_some() => {
                log::warn!("Signed up with incomplete data: {err}");
                loading.set(false);
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Poems);
                }
            }
            Err(err) => {
                loading.set(false);
                error_msg.set(Some(format!("Sign up failed: {err}")));
            }
        }
    });

    let to_login = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <div class="bg-white border border-gray-200 rounded-lg p-6 w-full max-w-sm">
                <h1 class="text-2xl font-bold text-gray-900 mb-6">{ "Join Stanza" }</h1>

                <form onsubmit={on_submit} class="space-y-4">
                    <TextField
                        id="signup-username"
                        label="Username"
                        value={(*username).clone()}
                        oninput={bind(&username)}
                        disabled={*loading}
                    />
                    <TextField
                        id="signup-name"
                        label="Display name (optional)"
                        value={(*name).clone()}
                        oninput={bind(&name)}
                        disabled={*loading}
                    />
                    <TextArea
                        id="signup-bio"
                        label="Bio (optional)"
                        rows={3}
                        value={(*bio).clone()}
                        oninput={bind(&bio)}
                        disabled={*loading}
                    />
                    <TextField
                        id="signup-password"
                        label="Password"
                        kind="password"
                        value={(*password).clone()}
                        oninput={bind(&password)}
                        disabled={*loading}
                    />

                    <ErrorBanner message={(*error_msg).clone()} />

                    <button
                        type="submit"
                        class="w-full px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled={*loading || !is_valid}
                    >
                        { if *loading { "Creating account..." } else { "Sign up" } }
                    </button>
                </form>

                <p class="mt-4 text-sm text-gray-600">
                    { "Already have an account? " }
                    <button class="text-blue-700 hover:underline cursor-pointer" onclick={to_login}>
                        { "Log in" }
                    </button>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_drops_blank_values() {
        assert_eq!(optional("   "), None);
        assert_eq!(optional(" Issa "), Some("Issa".to_string()));
    }
}
