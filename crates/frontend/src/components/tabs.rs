//! Settings tab strip component.

use ui_types::SettingsTab;
use yew::prelude::*;

/// Properties for the TabStrip component.
#[derive(Properties, PartialEq)]
pub struct TabStripProps {
    /// Currently selected tab.
    pub active: SettingsTab,
    /// Fired with the clicked tab's identifier.
    pub on_select: Callback<SettingsTab>,
}

/// Tab strip: one button per settings tab, state owned by the settings page.
#[function_component(TabStrip)]
pub fn tab_strip(props: &TabStripProps) -> Html {
    html! {
        <div class="tab-strip" role="tablist">
            { for SettingsTab::ALL.iter().map(|tab| {
                let tab = *tab;
                let selected = tab == props.active;
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(tab))
                };
                html! {
                    <button
                        class={classes!("tab", selected.then_some("active"))}
                        role="tab"
                        aria-selected={if selected { "true" } else { "false" }}
                        {onclick}
                    >
                        { tab.label() }
                    </button>
                }
            })}
        </div>
    }
}
