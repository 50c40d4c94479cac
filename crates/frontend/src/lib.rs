//! InnovaEd - Yew WASM frontend.
//!
//! This crate renders the login, dashboard, and section views of the
//! InnovaEd academic-assistance app. The state machines behind the UI
//! live in the `ui_core` crate.

mod app;
mod components;
mod hooks;
mod notify;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
