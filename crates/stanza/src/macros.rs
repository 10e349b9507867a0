#[macro_export]
/// Allow defining an async callback that can be used in Yew components.
/// This macro simplifies the creation of async callbacks by automatically
/// handling the cloning of variables and the spawning of async tasks.
///
/// ## With the macro
/// The macro can be used in two forms:
///
/// 1. Without an event parameter:
/// ```compile_fail
/// let refresh = async_callback!([store, error_msg] {
///     error_msg.set(None);
///     if let Err(err) = store.fetch_poems().await {
///         error_msg.set(Some(format!("Error fetching poems: {}", err)));
///     }
/// });
/// ```
///
/// 2. With an event parameter:
/// ```compile_fail
/// let on_submit = async_callback!([store, loading, error_msg] |event: SubmitEvent| {
///     event.prevent_default();
///     loading.set(true);
///     match store.create_poem(&new_poem).await {
///         Ok(_) => loading.set(false),
///         Err(err) => {
///             loading.set(false);
///             error_msg.set(Some(format!("Error saving poem: {}", err)));
///         }
///     }
/// });
/// ```
///
/// ## Without the macro
/// ```compile_fail
/// // Manual approach - verbose and error-prone
/// let store_clone = store.clone();
/// let error_msg_clone = error_msg.clone();
/// let refresh = Callback::from(move |_| {
///     let store = store_clone.clone();
///     let error_msg = error_msg_clone.clone();
///     wasm_bindgen_futures::spawn_local(async move {
///         error_msg.set(None);
///         if let Err(err) = store.fetch_poems().await {
///             error_msg.set(Some(format!("Error fetching poems: {}", err)));
///         }
///     });
/// });
/// ```
macro_rules! async_callback {
    // Version with event parameter, must precede the expr arm
    ([$($var:ident),* $(,)?] |$event:ident $(: $ty:ty)?| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event $(: $ty)?| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };

    // Version without event parameter
    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |_| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };
}
