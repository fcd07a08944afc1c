//! Settings page: heading, tab strip, and the selected tab's panel.

use ui_types::SettingsTab;
use yew::prelude::*;

use crate::components::{RolesPanel, TabStrip};

/// Whether a tab has registered content. Only Roles does; selecting any
/// other tab is a valid transition that shows an empty content area.
pub fn has_panel(tab: SettingsTab) -> bool {
    matches!(tab, SettingsTab::Roles)
}

fn panel(tab: SettingsTab) -> Html {
    if has_panel(tab) {
        html! { <RolesPanel /> }
    } else {
        Html::default()
    }
}

/// Settings page component. Owns the active-tab state.
#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let active_tab = use_state(|| SettingsTab::DEFAULT);

    let on_select = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: SettingsTab| active_tab.set(tab))
    };

    html! {
        <div class="settings-page">
            <div class="page-heading">
                <h1>{"Settings"}</h1>
                <p class="text-secondary">{"Manage your team and preferences here."}</p>
            </div>
            <TabStrip active={*active_tab} {on_select} />
            <div class="tab-content">
                { panel(*active_tab) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_roles_has_a_panel() {
        for tab in SettingsTab::ALL {
            assert_eq!(has_panel(tab), tab == SettingsTab::Roles);
        }
    }
}
