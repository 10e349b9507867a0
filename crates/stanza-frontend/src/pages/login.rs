use yew::prelude::*;
use yew_router::prelude::*;

use stanza::session::TokenStore;
use stanza::{async_callback, data::LoginRequest, log};

use crate::components::{ErrorBanner, TextField, bind};
use crate::providers::{StoreContext, use_store};
use crate::routes::Route;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let StoreContext { store, .. } = use_store();
    let navigator = use_navigator();

    // Form state
    let username = use_state(String::new);
    let password = use_state(String::new);

    // UI state
    let loading = use_state(|| false);
    let error_msg = use_state(|| None::<String>);

    let is_valid = !username.trim().is_empty() && !password.is_empty();

    let on_submit = async_callback!([store, navigator, username, password, loading, error_msg] |e: SubmitEvent| {
        e.prevent_default();

        if username.trim().is_empty() || password.is_empty() {
            error_msg.set(Some("Username and password are required".to_string()));
            return;
        }
        if *loading {
            return;
        }

        loading.set(true);
        error_msg.set(None);

        let credentials = LoginRequest {
            username: username.trim().to_string(),
            password: (*password).clone(),
        };

        match store.login(&credentials).await {
            Ok(()) => {
                loading.set(false);
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Poems);
                }
            }
            // Signed in, but part of the data did not load
            Err(err) if store.tokens().load().is_some() => {
                log::warn!("Signed in with incomplete data: {err}");
                loading.set(false);
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Poems);
                }
            }
            Err(err) => {
                loading.set(false);
                error_msg.set(Some(format!("Login failed: {err}")));
            }
        }
    });

    let to_signup = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Signup);
            }
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <div class="bg-white border border-gray-200 rounded-lg p-6 w-full max-w-sm">
                <h1 class="text-2xl font-bold text-gray-900 mb-6">{ "Log in to Stanza" }</h1>

                <form onsubmit={on_submit} class="space-y-4">
                    <TextField
                        id="login-username"
                        label="Username"
                        value={(*username).clone()}
                        oninput={bind(&username)}
                        disabled={*loading}
                    />
                    <TextField
                        id="login-password"
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
                        { if *loading { "Logging in..." } else { "Log in" } }
                    </button>
                </form>

                <p class="mt-4 text-sm text-gray-600">
                    { "New here? " }
                    <button class="text-blue-700 hover:underline cursor-pointer" onclick={to_signup}>
                        { "Create an account" }
                    </button>
                </p>
            </div>
        </div>
    }
}
