//! Loading spinner component.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    /// Short status line under the spinner.
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

/// Centered spinner with an optional status line.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="loading">
            <div class="spinner"></div>
            if let Some(label) = &props.label {
                <p class="loading-label">{ label.clone() }</p>
            }
        </div>
    }
}
