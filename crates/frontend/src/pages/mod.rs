//! Page components.

mod settings;

pub use settings::SettingsPage;
