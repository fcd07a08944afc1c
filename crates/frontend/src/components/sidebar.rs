//! Sidebar navigation component.

use ui_types::{IconKind, NAV_ITEMS};
use yew::prelude::*;

use crate::components::Icon;

/// Presentation class for the navigation block on narrow viewports.
/// Wide viewports force the sidebar visible through the stylesheet.
fn visibility_class(open: bool) -> &'static str {
    if open {
        "block"
    } else {
        "hidden"
    }
}

/// Properties for the Sidebar component.
#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    /// Mobile-menu flag owned by the layout shell.
    pub open: bool,
}

/// Sidebar: quick-search box plus the static navigation list.
/// None of the entries navigate anywhere; Settings carries the active style.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <nav class={classes!("sidebar", visibility_class(props.open))}>
            <div class="search-field sidebar-search">
                <Icon kind={IconKind::Search} />
                <input type="search" placeholder="Quick Search" />
            </div>
            <div class="nav-links">
                { for NAV_ITEMS.iter().map(|item| html! {
                    <button class={classes!("nav-button", item.active.then_some("active"))}>
                        <Icon kind={item.icon} />
                        { item.label }
                    </button>
                })}
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_two_cycle() {
        assert_eq!(visibility_class(false), "hidden");
        assert_eq!(visibility_class(true), "block");
        assert_eq!(visibility_class(false), "hidden");
    }
}
