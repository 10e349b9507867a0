use yew::prelude::*;
use yew_router::prelude::*;

use stanza::id::{PoemId, UserId};
use stanza::state::Gate;

use crate::components::Gated;
use crate::pages::{
    LoginPage, NewPoemPage, PoemPage, PoemsPage, ProfilePage, SignupPage, UserPage, UsersPage,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/signup")]
    Signup,
    #[at("/login")]
    Login,
    #[at("/profile")]
    Profile,
    #[at("/users")]
    Users,
    #[at("/users/:id")]
    User { id: UserId },
    #[at("/poems")]
    Poems,
    #[at("/poem/new")]
    NewPoem,
    #[at("/poems/:id")]
    Poem { id: PoemId },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// What must be loaded before this route renders anything.
    pub fn gate(&self) -> Gate {
        match self {
            Route::Poems | Route::Poem { .. } => Gate::Collections,
            Route::NewPoem | Route::Profile => Gate::CurrentUser,
            _ => Gate::Open,
        }
    }

    /// The navbar is hidden on the signed-out views.
    pub fn shows_navbar(&self) -> bool {
        !matches!(self, Route::Login | Route::Signup)
    }
}

pub fn switch(route: Route) -> Html {
    let gate = route.gate();
    let page = match route {
        Route::Home => html! { <Redirect<Route> to={Route::Poems} /> },
        Route::Signup => html! { <SignupPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::Users => html! { <UsersPage /> },
        Route::User { id } => html! { <UserPage id={id} /> },
        Route::Poems => html! { <PoemsPage /> },
        Route::NewPoem => html! { <NewPoemPage /> },
        Route::Poem { id } => html! { <PoemPage id={id} /> },
        Route::NotFound => html! { <div class="p-8">{ "404 Not Found" }</div> },
    };

    html! { <Gated gate={gate}>{ page }</Gated> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stanza::state::AppState;

    #[test]
    fn test_paths_resolve_to_routes() {
        assert_eq!(Route::recognize("/poems"), Some(Route::Poems));
        assert_eq!(Route::recognize("/poem/new"), Some(Route::NewPoem));
        assert_eq!(
            Route::recognize("/poems/7"),
            Some(Route::Poem { id: PoemId::new(7) })
        );
        assert_eq!(
            Route::recognize("/users/3"),
            Some(Route::User { id: UserId::new(3) })
        );
        assert_eq!(Route::Poem { id: PoemId::new(7) }.to_path(), "/poems/7");
    }

    #[test]
    fn test_poem_views_wait_for_every_collection() {
        assert_eq!(Route::Poems.gate(), Gate::Collections);
        assert_eq!(Route::Poem { id: PoemId::new(1) }.gate(), Gate::Collections);

        // Nothing is loaded yet, so the poem index renders nothing.
        assert!(!AppState::default().admits(Route::Poems.gate()));
    }

    #[test]
    fn test_authoring_needs_current_user() {
        assert_eq!(Route::NewPoem.gate(), Gate::CurrentUser);
        assert_eq!(Route::Login.gate(), Gate::Open);
    }

    #[test]
    fn test_navbar_hidden_on_signed_out_views() {
        assert!(!Route::Login.shows_navbar());
        assert!(!Route::Signup.shows_navbar());
        assert!(Route::Poems.shows_navbar());
    }
}
