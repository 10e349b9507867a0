mod components;
mod hooks;
mod pages;
mod providers;
mod routes;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use stanza::log;
use stanza::session::SessionStart;

use components::Navbar;
use hooks::use_actions;
use providers::{StoreContext, StoreProvider, use_store};
use routes::{Route, switch};

/// Restores the session once on startup and draws the navbar around the
/// routed page.
#[function_component(Shell)]
fn shell() -> Html {
    let StoreContext { store, .. } = use_store();
    let navigator = use_navigator();
    let location = use_location();
    let route = use_route::<Route>();
    let actions = use_actions();

    {
        let path = location
            .map(|location| location.path().to_string())
            .unwrap_or_default();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match store.establish_session(&path).await {
                    Ok(SessionStart::RedirectToLogin) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Ok(start) => log::debug!("Session start on {path}: {start:?}"),
                    Err(err) => log::error!("Failed to load session data: {err}"),
                }
            });
        });
    }

    let shows_navbar = route.as_ref().is_none_or(Route::shows_navbar);

    html! {
        <div class="min-h-screen bg-gray-50">
            {
                if shows_navbar {
                    html! { <Navbar actions={actions} /> }
                } else {
                    html! {}
                }
            }
            <main>
                <Switch<Route> render={switch} />
            </main>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <StoreProvider>
                <Shell />
            </StoreProvider>
        </BrowserRouter>
    }
}

fn main() {
    stanza::log::setup().expect("Failed to setup logging");
    log::info!("Starting Stanza");
    yew::Renderer::<App>::new().render();
}
