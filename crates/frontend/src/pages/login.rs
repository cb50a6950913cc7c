//! Login page: credential form, social sign-in and the OAuth landing.

use api_types::{LoginRequest, LoginResponse};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::Loading;
use crate::hooks::use_app_context;
use crate::services::{OauthCallback, SOCIAL_LOGIN_FAILED, SocialProvider, parse_oauth_callback};

/// Login page component.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let context = use_app_context();
    let navigator = use_navigator();

    let login_id = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    // Read once on mount; the query string never changes underneath a
    // single page view.
    let callback = use_state(|| parse_oauth_callback(&location_search()));

    {
        let context = context.clone();
        let navigator = navigator.clone();
        let error = error.clone();
        use_effect_with((*callback).clone(), move |outcome| {
            match outcome {
                OauthCallback::Success { token, nickname } => {
                    context.auth.complete_login(&LoginResponse {
                        nickname: nickname.clone(),
                        access_token: token.clone(),
                    });
                    if let Some(navigator) = &navigator {
                        navigator.replace(&Route::Main);
                    }
                }
                OauthCallback::Failed => {
                    error.set(Some(SOCIAL_LOGIN_FAILED.to_string()));
                    strip_query_string();
                }
                OauthCallback::None => {}
            }
        });
    }

    let onsubmit = {
        let login_id = login_id.clone();
        let password = password.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let auth = context.auth.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);
            error.set(None);

            let request = LoginRequest {
                login_id: (*login_id).clone(),
                password: (*password).clone(),
            };
            let auth = auth.clone();
            let navigator = navigator.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            spawn_local(async move {
                match auth.login(&request).await {
                    Ok(response) => {
                        auth.complete_login(&response);
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Main);
                        }
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    let on_login_id = input_setter(&login_id);
    let on_password = input_setter(&password);

    let on_toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let social_buttons = SocialProvider::ALL.iter().map(|provider| {
        let auth = context.auth.clone();
        let error = error.clone();
        let name = provider.as_str();
        let onclick = Callback::from(move |_: MouseEvent| {
            if let Err(err) = auth.social_login(name) {
                error.set(Some(err.to_string()));
            }
        });
        html! {
            <button type="button" class={format!("social-button {name}")} {onclick}>
                { format!("{}로 시작하기", provider.label()) }
            </button>
        }
    });

    // An OAuth landing shows only the spinner while the session is
    // committed and the redirect happens.
    if matches!(&*callback, OauthCallback::Success { .. }) {
        return html! { <Loading label="로그인 처리 중..." /> };
    }

    html! {
        <div class="login-page">
            <div class="card login-card">
                <h1 class="login-title">{"꼬마손"}</h1>
                <p class="login-subtitle">{"수어로 만나는 새로운 세상"}</p>

                <form class="login-form" {onsubmit}>
                    <label class="field">
                        <span>{"아이디"}</span>
                        <input
                            type="text"
                            value={(*login_id).clone()}
                            oninput={on_login_id}
                            placeholder="아이디를 입력하세요"
                        />
                    </label>
                    <label class="field">
                        <span>{"비밀번호"}</span>
                        <div class="password-field">
                            <input
                                type={if *show_password { "text" } else { "password" }}
                                value={(*password).clone()}
                                oninput={on_password}
                                placeholder="비밀번호를 입력하세요"
                            />
                            <button
                                type="button"
                                class="password-toggle"
                                onclick={on_toggle_password}
                            >
                                { if *show_password { "숨기기" } else { "표시" } }
                            </button>
                        </div>
                    </label>

                    if let Some(message) = &*error {
                        <p class="form-error">{ message.clone() }</p>
                    }

                    <button type="submit" class="login-button" disabled={*submitting}>
                        { if *submitting { "로그인 중..." } else { "로그인" } }
                    </button>
                </form>

                <div class="login-links">
                    <button type="button" class="login-link">{"아이디 찾기"}</button>
                    <button type="button" class="login-link">{"비밀번호 찾기"}</button>
                    <button type="button" class="login-link">{"회원가입"}</button>
                </div>

                <div class="divider">{"또는"}</div>

                <div class="social-buttons">
                    { for social_buttons }
                </div>
            </div>
        </div>
    }
}

fn input_setter(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        state.set(input.value());
    })
}

fn location_search() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

/// Drops `?token=...` style leftovers from the address bar without a
/// navigation.
fn strip_query_string() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some("/login"));
    }
}
