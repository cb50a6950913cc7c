//! Top navigation bar for signed-in pages.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::hooks::use_app_context;

/// Brand, section tabs, the nickname greeting and the logout button.
#[function_component(Header)]
pub fn header() -> Html {
    let context = use_app_context();
    let navigator = use_navigator();

    let nickname = context.session.nickname().unwrap_or_default();

    let on_logout = {
        let auth = context.auth.clone();
        Callback::from(move |_: MouseEvent| {
            let auth = auth.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                auth.logout().await;
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Login);
                }
            });
        })
    };

    html! {
        <header class="header">
            <div class="header-inner">
                <Link<Route> to={Route::Main} classes="brand">{"꼬마손"}</Link<Route>>
                <nav class="header-tabs">
                    <Link<Route> to={Route::Main} classes="tab">{"학습하기"}</Link<Route>>
                    <Link<Route> to={Route::Test} classes="tab">{"테스트"}</Link<Route>>
                    <button class="tab" disabled={true}>{"랭킹"}</button>
                    <button class="tab" disabled={true}>{"마이페이지"}</button>
                </nav>
                <div class="header-user">
                    <span class="greeting">{ format!("{nickname}님, 환영합니다! 👋") }</span>
                    <button class="logout-button" onclick={on_logout}>{"로그아웃"}</button>
                </div>
            </div>
        </header>
    }
}
