//! Hooks wiring shared state into function components.

use yew::prelude::*;

use crate::app::AppContext;
use crate::session::Session;

/// App-wide service handle. Panics outside the provider, which is a
/// wiring bug rather than a runtime condition.
#[hook]
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext provider missing")
}

/// Live session snapshot; re-renders the component on every change.
#[hook]
pub fn use_session() -> Session {
    let context = use_app_context();
    let snapshot = use_state(|| context.session.snapshot());

    {
        let store = context.session.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let id = store.subscribe(move |session| snapshot.set(session.clone()));
            move || store.unsubscribe(id)
        });
    }

    (*snapshot).clone()
}
