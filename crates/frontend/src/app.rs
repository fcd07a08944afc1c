//! Layout shell: header plus the two-column page body.

use yew::prelude::*;

use crate::components::{Header, Sidebar};
use crate::pages::SettingsPage;

/// Main application component.
///
/// Owns the mobile-menu flag; the header's menu button flips it and the
/// sidebar reads it. Wide viewports show the sidebar regardless of the flag
/// via the stylesheet.
#[function_component(App)]
pub fn app() -> Html {
    let mobile_menu_open = use_state(|| false);

    let on_menu_toggle = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            mobile_menu_open.set(!*mobile_menu_open);
        })
    };

    html! {
        <div class="app">
            <Header {on_menu_toggle} />
            <div class="page-body">
                <Sidebar open={*mobile_menu_open} />
                <main class="main-content">
                    <SettingsPage />
                </main>
            </div>
        </div>
    }
}
