//! 꼬마손 - Yew WASM client for the sign-language learning service.
//!
//! Single-page app: credential and social login, a learning dashboard
//! and the sign quiz, all speaking JSON to the kkomason backend.

mod api;
mod app;
mod components;
mod config;
mod hooks;
mod log;
mod pages;
mod quiz;
mod services;
mod session;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
