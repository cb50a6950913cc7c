//! Application shell: routes, shared context and the route switch.

use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::RootLayout;
use crate::config::ApiConfig;
use crate::hooks::use_session;
use crate::pages::{LoginPage, MainPage, TestPage};
use crate::services::{AuthService, TestService};
use crate::session::{BrowserStorage, SessionStore};

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/main")]
    Main,
    #[at("/test")]
    Test,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Shared handles every page reaches through context: the session
/// store plus the services built over one [`ApiClient`].
#[derive(Clone)]
pub struct AppContext {
    pub session: SessionStore,
    pub auth: Rc<AuthService>,
    pub tests: Rc<TestService>,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        let session = SessionStore::new(BrowserStorage);
        let client = ApiClient::new(config, session.reader());
        let auth = Rc::new(AuthService::new(client.clone(), session.clone()));
        let tests = Rc::new(TestService::new(client));
        Self {
            session,
            auth,
            tests,
        }
    }
}

// All clones share the one store built at mount, so equality is
// pointer identity on it.
impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session
    }
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomeRedirect /> },
        Route::Login => html! { <LoginPage /> },
        Route::Main => html! { <RootLayout><MainPage /></RootLayout> },
        Route::Test => html! { <RootLayout><TestPage /></RootLayout> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404"}</h1>
                <p>{"페이지를 찾을 수 없습니다."}</p>
            </div>
        },
    }
}

/// `/` lands on the dashboard when signed in, the login page otherwise.
#[function_component(HomeRedirect)]
fn home_redirect() -> Html {
    let session = use_session();
    if session.is_authenticated {
        html! { <Redirect<Route> to={Route::Main} /> }
    } else {
        html! { <Redirect<Route> to={Route::Login} /> }
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let context = use_memo((), |_| AppContext::new(ApiConfig::default()));

    html! {
        <ContextProvider<AppContext> context={(*context).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<AppContext>>
    }
}
