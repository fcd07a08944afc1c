//! Roles tab content: connected emails, active roles, user-roles table.

use ui_types::{IconKind, ACCOUNT_EMAIL, ACTIVE_ROLES, ALTERNATIVE_EMAIL, USER_ROLES};
use yew::prelude::*;

use crate::components::{AvatarStack, Icon};

/// Roles panel: three static sections rendered from the sample records.
/// The Edit, Add role, Download all, and row-overflow buttons are inert.
#[function_component(RolesPanel)]
pub fn roles_panel() -> Html {
    html! {
        <div class="card roles-panel">
            <section class="email-section">
                <h3>{"Connected email"}</h3>
                <div class="field">
                    <label>{"My account email"}</label>
                    <p>{ ACCOUNT_EMAIL }</p>
                </div>
                <div class="field">
                    <label>{"Alternative email"}</label>
                    <p>{ ALTERNATIVE_EMAIL }</p>
                </div>
            </section>

            <section class="active-role-section">
                <h3>{"Active Role"}</h3>
                { for ACTIVE_ROLES.iter().map(|active| html! {
                    <div class="active-role-row">
                        <div class="active-role-info">
                            <img
                                class="avatar avatar-lg"
                                src="/api/placeholder/32/32"
                                alt={active.role}
                            />
                            <div>
                                <p class="role-name">{ active.role }</p>
                                <p class="text-secondary">
                                    { format!("Last active {}", active.last_active) }
                                </p>
                            </div>
                        </div>
                        <button class="btn btn-outline btn-sm">{"Edit"}</button>
                    </div>
                })}
                <button class="btn btn-outline btn-block">{"Add role to user"}</button>
            </section>

            <section class="roles-table-section">
                <div class="section-header">
                    <h3>{"User Roles"}</h3>
                    <button class="btn btn-outline btn-sm">
                        <Icon kind={IconKind::Download} />
                        {"Download all"}
                    </button>
                </div>
                <div class="table-scroll">
                    <table class="roles-table">
                        <thead>
                            <tr>
                                <th>{"Name"}</th>
                                <th>{"Type"}</th>
                                <th>{"Date created"}</th>
                                <th>{"Status"}</th>
                                <th>{"Role users"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for USER_ROLES.iter().map(|role| html! {
                                <tr>
                                    <td>{ role.name }</td>
                                    <td class="text-secondary">{ role.kind.as_str() }</td>
                                    <td class="text-secondary">{ role.date_created }</td>
                                    <td>
                                        <span class={classes!(
                                            "status-badge",
                                            role.status.is_active().then_some("status-active"),
                                        )}>
                                            { role.status.as_str() }
                                        </span>
                                    </td>
                                    <td><AvatarStack count={role.users} /></td>
                                    <td>
                                        <button class="btn btn-ghost btn-sm" aria-label="More options">
                                            <Icon kind={IconKind::MoreHorizontal} />
                                        </button>
                                    </td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </div>
            </section>
        </div>
    }
}
