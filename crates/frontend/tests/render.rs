//! Host-side rendering tests: the component tree is rendered to a string
//! and inspected for the labels, roles, and sections the page promises.

#![cfg(not(target_arch = "wasm32"))]

use frontend::{App, AvatarStack, AvatarStackProps, SettingsPage};
use yew::LocalServerRenderer;

async fn render_app() -> String {
    LocalServerRenderer::<App>::new()
        .hydratable(false)
        .render()
        .await
}

async fn render_stack(count: u32) -> String {
    LocalServerRenderer::<AvatarStack>::with_props(AvatarStackProps { count })
        .hydratable(false)
        .render()
        .await
}

fn occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[tokio::test]
async fn header_renders_logo_and_brand() {
    let html = render_app().await;
    assert_eq!(occurrences(&html, r#"alt="Logo""#), 1);
    assert_eq!(occurrences(&html, "Untitled UI"), 1);
    assert_eq!(occurrences(&html, r#"aria-label="Menu""#), 1);
}

#[tokio::test]
async fn search_inputs_are_distinct() {
    let html = render_app().await;
    assert_eq!(occurrences(&html, r#"placeholder="Search""#), 1);
    assert_eq!(occurrences(&html, r#"placeholder="Quick Search""#), 1);
}

#[tokio::test]
async fn navigation_starts_hidden() {
    let html = render_app().await;
    assert!(html.contains(r#"class="sidebar hidden""#));
    assert!(!html.contains(r#"class="sidebar block""#));
}

#[tokio::test]
async fn navigation_lists_each_item_once() {
    let html = render_app().await;
    for label in [
        "Home",
        "Dashboard",
        "Projects",
        "Tasks",
        "Reporting",
        "Users",
        "Support",
        "Settings",
    ] {
        assert_eq!(
            occurrences(&html, &format!("{label}</button>")),
            1,
            "nav item {label}"
        );
    }
    // Settings is the one active entry
    assert_eq!(occurrences(&html, r#"class="nav-button active""#), 1);
}

#[tokio::test]
async fn tab_strip_lists_each_tab_once_with_roles_selected() {
    let html = render_app().await;
    for label in [
        "My details",
        "Profile",
        "Password",
        "Team",
        "Plan",
        "Roles",
        "Notifications",
        "Integrations",
        "API",
    ] {
        assert_eq!(
            occurrences(&html, &format!("{label}</button>")),
            1,
            "tab {label}"
        );
    }
    assert_eq!(occurrences(&html, r#"aria-selected="true""#), 1);
    assert_eq!(occurrences(&html, r#"aria-selected="false""#), 8);
}

#[tokio::test]
async fn settings_heading_is_present() {
    let html = render_app().await;
    assert!(html.contains("<h1>Settings</h1>"));
    assert!(html.contains("Manage your team and preferences here."));
}

#[tokio::test]
async fn roles_panel_shows_connected_emails_once() {
    let html = render_app().await;
    assert!(html.contains("Connected email"));
    assert!(html.contains("My account email"));
    assert!(html.contains("Alternative email"));
    assert_eq!(occurrences(&html, "olivia@untitledui.com"), 1);
    assert_eq!(occurrences(&html, "billing@untitledui.com"), 1);
}

#[tokio::test]
async fn roles_panel_shows_active_roles_with_edit_buttons() {
    let html = render_app().await;
    assert!(html.contains("Active Role"));
    assert!(html.contains("Last active 06/23/23"));
    assert!(html.contains("Last active 05/23/23"));
    assert!(html.contains("Last active 10/22/22"));
    assert_eq!(occurrences(&html, "Edit</button>"), 3);
    assert_eq!(occurrences(&html, "Add role to user</button>"), 1);
}

#[tokio::test]
async fn roles_table_has_expected_columns_and_rows() {
    let html = render_app().await;
    for header in ["Name", "Type", "Date created", "Status", "Role users"] {
        assert_eq!(
            occurrences(&html, &format!("<th>{header}</th>")),
            1,
            "column {header}"
        );
    }
    for name in [
        "Superadmin",
        "Merchantadmin",
        "Supportadmin",
        "Sales personnel",
        "Deputy sales personnel",
        "Developeradmin",
        "Developer-basic",
    ] {
        assert_eq!(
            occurrences(&html, &format!("<td>{name}</td>")),
            1,
            "row {name}"
        );
    }
    // Header row plus seven data rows
    assert_eq!(occurrences(&html, "<tr>"), 8);
    // Every sample role is Active and gets the highlighted badge
    assert_eq!(occurrences(&html, r#"class="status-badge status-active""#), 7);
}

#[tokio::test]
async fn roles_table_avatar_stacks_match_user_counts() {
    let html = render_app().await;
    // users per row: 4, 5, 5, 3, 4, 4, 3 -> 26 visible avatars
    assert_eq!(occurrences(&html, r#"class="avatar""#), 26);
    // the two five-user rows each overflow by one
    assert_eq!(occurrences(&html, ">+1<"), 2);
}

#[tokio::test]
async fn download_all_button_carries_the_glyph() {
    let html = render_app().await;
    assert_eq!(occurrences(&html, "Download all"), 1);
    assert!(html.contains("icon-download"));
}

#[tokio::test]
async fn settings_page_defaults_to_roles_tab() {
    let html = LocalServerRenderer::<SettingsPage>::new()
        .hydratable(false)
        .render()
        .await;
    assert!(html.contains("Connected email"));
    assert!(html.contains("User Roles"));
}

#[tokio::test]
async fn avatar_stack_caps_at_four() {
    let html = render_stack(4).await;
    assert_eq!(occurrences(&html, "<img"), 4);
    assert!(!html.contains("avatar-overflow"));
}

#[tokio::test]
async fn avatar_stack_overflows_past_four() {
    let html = render_stack(5).await;
    assert_eq!(occurrences(&html, "<img"), 4);
    assert!(html.contains(">+1<"));
}

#[tokio::test]
async fn avatar_stack_renders_nothing_for_zero() {
    let html = render_stack(0).await;
    assert_eq!(occurrences(&html, "<img"), 0);
    assert!(!html.contains("avatar-overflow"));
}
