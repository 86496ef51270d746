//! Read-only access to configured values.

use crate::config::schema::Settings;

/// Read-only view of the configuration consumed by the special directory
/// resolver.
///
/// Every accessor returns the configured value, or an empty string when the
/// value is not configured. Implementations must not change between calls
/// made while resolving a single directory.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigProvider {
    /// Root of the joypad autoconfig profiles.
    fn autoconfig_directory(&self) -> String;

    /// Root of the menu assets.
    fn assets_directory(&self) -> String;

    /// Directory for menu-saved configuration files.
    fn menu_config_directory(&self) -> String;

    /// Active joypad driver name.
    fn joypad_driver(&self) -> String;

    /// Menu wallpaper override.
    fn menu_wallpaper(&self) -> String;

    /// XMB font override.
    fn xmb_font(&self) -> String;

    /// Path of the configuration file currently in use.
    fn config_path(&self) -> String;

    /// Active theme identifier.
    fn theme(&self) -> String;
}

impl ConfigProvider for Settings {
    fn autoconfig_directory(&self) -> String {
        self.directory.autoconfig.clone().unwrap_or_default()
    }

    fn assets_directory(&self) -> String {
        self.directory.assets.clone().unwrap_or_default()
    }

    fn menu_config_directory(&self) -> String {
        self.directory.menu_config.clone().unwrap_or_default()
    }

    fn joypad_driver(&self) -> String {
        self.input.joypad_driver.clone().unwrap_or_default()
    }

    fn menu_wallpaper(&self) -> String {
        self.path.menu_wallpaper.clone().unwrap_or_default()
    }

    fn xmb_font(&self) -> String {
        self.path.xmb_font.clone().unwrap_or_default()
    }

    fn config_path(&self) -> String {
        self.path.config.clone().unwrap_or_default()
    }

    fn theme(&self) -> String {
        self.theme_or_default().to_owned()
    }
}
