//! Shared types for the settings dashboard.
//!
//! This crate defines the data model rendered by the frontend and the
//! hard-coded sample records that stand in for a real data source. Nothing
//! here is created, mutated, or destroyed at runtime.

use serde::Serialize;

/// A user avatar: an image source plus fallback initials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserAvatar {
    /// Image reference
    pub src: &'static str,
    /// Initials shown when the image is unavailable
    pub fallback: &'static str,
}

/// How a role was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum RoleKind {
    /// Built-in role
    Default,
    /// Role created by an administrator
    Custom,
    /// Role created by the system from a custom template
    SystemCustom,
}

impl RoleKind {
    /// Display form used in the roles table.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKind::Default => "DEFAULT",
            RoleKind::Custom => "CUSTOM",
            RoleKind::SystemCustom => "SYSTEM-CUSTOM",
        }
    }
}

/// Lifecycle status of a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoleStatus {
    Active,
    Inactive,
}

impl RoleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleStatus::Active => "Active",
            RoleStatus::Inactive => "Inactive",
        }
    }

    /// Active rows get the highlighted badge style.
    pub fn is_active(&self) -> bool {
        matches!(self, RoleStatus::Active)
    }
}

/// A row in the user-roles table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserRole {
    pub name: &'static str,
    pub kind: RoleKind,
    pub date_created: &'static str,
    pub status: RoleStatus,
    /// Number of users holding the role; drives the avatar stack
    pub users: u32,
}

/// A row in the active-role list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveRole {
    pub role: &'static str,
    pub last_active: &'static str,
}

/// Identifier for one of the nine settings tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsTab {
    Details,
    Profile,
    Password,
    Team,
    Plan,
    Roles,
    Notifications,
    Integrations,
    Api,
}

impl SettingsTab {
    /// All tabs in display order.
    pub const ALL: [SettingsTab; 9] = [
        SettingsTab::Details,
        SettingsTab::Profile,
        SettingsTab::Password,
        SettingsTab::Team,
        SettingsTab::Plan,
        SettingsTab::Roles,
        SettingsTab::Notifications,
        SettingsTab::Integrations,
        SettingsTab::Api,
    ];

    /// Tab shown on first render.
    pub const DEFAULT: SettingsTab = SettingsTab::Roles;

    /// Visible tab label.
    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::Details => "My details",
            SettingsTab::Profile => "Profile",
            SettingsTab::Password => "Password",
            SettingsTab::Team => "Team",
            SettingsTab::Plan => "Plan",
            SettingsTab::Roles => "Roles",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Integrations => "Integrations",
            SettingsTab::Api => "API",
        }
    }
}

/// Glyph identifiers for the inline SVG icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Menu,
    Home,
    Dashboard,
    Folder,
    CheckSquare,
    PieChart,
    Users,
    HelpCircle,
    Settings,
    Search,
    Download,
    MoreHorizontal,
}

/// An entry in the sidebar navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: IconKind,
    /// Whether this entry carries the active style
    pub active: bool,
}

/// Sidebar navigation entries in display order. Settings is the active one.
pub const NAV_ITEMS: [NavItem; 8] = [
    NavItem { label: "Home", icon: IconKind::Home, active: false },
    NavItem { label: "Dashboard", icon: IconKind::Dashboard, active: false },
    NavItem { label: "Projects", icon: IconKind::Folder, active: false },
    NavItem { label: "Tasks", icon: IconKind::CheckSquare, active: false },
    NavItem { label: "Reporting", icon: IconKind::PieChart, active: false },
    NavItem { label: "Users", icon: IconKind::Users, active: false },
    NavItem { label: "Support", icon: IconKind::HelpCircle, active: false },
    NavItem { label: "Settings", icon: IconKind::Settings, active: true },
];

/// Sample avatars backing every avatar stack.
pub const USER_AVATARS: [UserAvatar; 5] = [
    UserAvatar { src: "/api/placeholder/32/32", fallback: "U1" },
    UserAvatar { src: "/api/placeholder/32/32", fallback: "U2" },
    UserAvatar { src: "/api/placeholder/32/32", fallback: "U3" },
    UserAvatar { src: "/api/placeholder/32/32", fallback: "U4" },
    UserAvatar { src: "/api/placeholder/32/32", fallback: "U5" },
];

/// Sample rows for the user-roles table.
pub const USER_ROLES: [UserRole; 7] = [
    UserRole {
        name: "Superadmin",
        kind: RoleKind::Default,
        date_created: "Jan 1, 2023",
        status: RoleStatus::Active,
        users: 4,
    },
    UserRole {
        name: "Merchantadmin",
        kind: RoleKind::Default,
        date_created: "Feb 1, 2023",
        status: RoleStatus::Active,
        users: 5,
    },
    UserRole {
        name: "Supportadmin",
        kind: RoleKind::Default,
        date_created: "Feb 1, 2023",
        status: RoleStatus::Active,
        users: 5,
    },
    UserRole {
        name: "Sales personnel",
        kind: RoleKind::Custom,
        date_created: "Mar 1, 2023",
        status: RoleStatus::Active,
        users: 3,
    },
    UserRole {
        name: "Deputy sales personnel",
        kind: RoleKind::Custom,
        date_created: "Apr 1, 2023",
        status: RoleStatus::Active,
        users: 4,
    },
    UserRole {
        name: "Developeradmin",
        kind: RoleKind::SystemCustom,
        date_created: "May 1, 2023",
        status: RoleStatus::Active,
        users: 4,
    },
    UserRole {
        name: "Developer-basic",
        kind: RoleKind::SystemCustom,
        date_created: "Jun 1, 2023",
        status: RoleStatus::Active,
        users: 3,
    },
];

/// Sample rows for the active-role list.
pub const ACTIVE_ROLES: [ActiveRole; 3] = [
    ActiveRole { role: "Superadmin", last_active: "06/23/23" },
    ActiveRole { role: "Developeradmin", last_active: "05/23/23" },
    ActiveRole { role: "Supportadmin", last_active: "10/22/22" },
];

/// Connected-email values shown on the Roles tab.
pub const ACCOUNT_EMAIL: &str = "olivia@untitledui.com";
pub const ALTERNATIVE_EMAIL: &str = "billing@untitledui.com";
