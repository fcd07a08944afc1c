//! Settings Dashboard - Yew WASM Frontend
//!
//! This crate provides the single-page "Settings" screen of the Untitled UI
//! demo: header, collapsible sidebar navigation, and a tabbed settings panel
//! whose Roles tab renders hard-coded sample data.

mod app;
mod components;
mod pages;

pub use app::App;
pub use components::{AvatarStack, AvatarStackProps, RolesPanel, TabStrip};
pub use pages::SettingsPage;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
