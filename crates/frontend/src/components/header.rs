//! Top header bar component.

use ui_types::IconKind;
use yew::prelude::*;

use crate::components::Icon;

/// Properties for the Header component.
#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Fired by the mobile menu button; the shell flips its menu flag.
    pub on_menu_toggle: Callback<MouseEvent>,
}

/// Header bar: logo, product name, search box, mobile menu toggle.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="header-inner">
                <div class="brand">
                    <img class="logo" src="/api/placeholder/32/32" alt="Logo" />
                    <span class="brand-name">{"Untitled UI"}</span>
                </div>
                <div class="header-actions">
                    <div class="search-field header-search">
                        <Icon kind={IconKind::Search} />
                        <input type="search" placeholder="Search" />
                    </div>
                    <button
                        class="menu-button"
                        aria-label="Menu"
                        onclick={props.on_menu_toggle.clone()}
                    >
                        <Icon kind={IconKind::Menu} />
                    </button>
                </div>
            </div>
        </header>
    }
}
