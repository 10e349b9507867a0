use std::rc::Rc;

use yew::prelude::*;

use stanza::Store;
use stanza::config::ClientConfig;

use super::api;
use super::token::LocalTokenStore;

pub type AppStore = Store<api::Service, LocalTokenStore>;

/// Create the application store from the build-time configuration.
pub fn create() -> AppStore {
    let config = ClientConfig::from_env();
    Store::new(api::create(&config), LocalTokenStore::new(&config.token_key))
}

/// Bumped on every store change so context consumers re-render.
#[derive(Default, PartialEq)]
struct Revision(u64);

impl Reducible for Revision {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: Self::Action) -> Rc<Self> {
        Rc::new(Revision(self.0 + 1))
    }
}

#[derive(Clone)]
pub struct StoreContext {
    pub store: Rc<AppStore>,
    pub revision: u64,
}

impl PartialEq for StoreContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.revision == other.revision
    }
}

#[derive(Properties, PartialEq)]
pub struct StoreProviderProps {
    pub children: Children,
}

#[function_component(StoreProvider)]
pub fn store_provider(props: &StoreProviderProps) -> Html {
    let store = use_memo((), |_| create());
    let revision = use_reducer(Revision::default);

    {
        let store = store.clone();
        let dispatcher = revision.dispatcher();
        use_effect_with((), move |_| {
            let listener = store.subscribe(move || dispatcher.dispatch(()));
            move || store.unsubscribe(listener)
        });
    }

    let context = StoreContext {
        store,
        revision: revision.0,
    };

    html! {
        <ContextProvider<StoreContext> context={context}>
            {props.children.clone()}
        </ContextProvider<StoreContext>>
    }
}

#[hook]
pub fn use_store() -> StoreContext {
    use_context::<StoreContext>().expect("use_store must be used within a StoreProvider")
}
