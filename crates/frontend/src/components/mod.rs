//! Reusable UI components.

mod avatar_stack;
mod header;
mod icons;
mod roles_panel;
mod sidebar;
mod tabs;

pub use avatar_stack::{AvatarStack, AvatarStackProps};
pub use header::Header;
pub use icons::Icon;
pub use roles_panel::RolesPanel;
pub use sidebar::Sidebar;
pub use tabs::TabStrip;
