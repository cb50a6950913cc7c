//! Shell for authenticated pages.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::Header;
use crate::hooks::use_session;

#[derive(Properties, PartialEq)]
pub struct RootLayoutProps {
    #[prop_or_default]
    pub children: Children,
}

/// Route guard plus chrome: unauthenticated visitors bounce to the
/// login page before any protected content renders.
#[function_component(RootLayout)]
pub fn root_layout(props: &RootLayoutProps) -> Html {
    let session = use_session();

    if !session.is_authenticated {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    html! {
        <>
            <Header />
            <main class="page">
                { props.children.clone() }
            </main>
        </>
    }
}
