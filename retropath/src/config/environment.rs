//! Environment variable handling for settings overrides.
//!
//! This module provides support for `RETROPATH_*` environment variables that
//! override values from settings files.

use crate::config::schema::Settings;
use crate::environment::Environment;

/// Overrides `directory.autoconfig`.
pub const AUTOCONFIG_DIR_VAR: &str = "RETROPATH_AUTOCONFIG_DIR";
/// Overrides `directory.assets`.
pub const ASSETS_DIR_VAR: &str = "RETROPATH_ASSETS_DIR";
/// Overrides `directory.menu_config`.
pub const MENU_CONFIG_DIR_VAR: &str = "RETROPATH_MENU_CONFIG_DIR";
/// Overrides `input.joypad_driver`.
pub const JOYPAD_DRIVER_VAR: &str = "RETROPATH_JOYPAD_DRIVER";
/// Overrides `path.menu_wallpaper`.
pub const MENU_WALLPAPER_VAR: &str = "RETROPATH_MENU_WALLPAPER";
/// Overrides `path.xmb_font`.
pub const XMB_FONT_VAR: &str = "RETROPATH_XMB_FONT";
/// Overrides `menu.theme`.
pub const THEME_VAR: &str = "RETROPATH_THEME";

/// Applies environment variable overrides to settings.
///
/// # Examples
///
/// ```
/// use retropath::config::{EnvironmentConfig, Settings};
/// use retropath::environment::FixedEnvironment;
///
/// let env = FixedEnvironment::new().with_var("RETROPATH_THEME", "flatui");
/// let mut settings = Settings::default();
/// EnvironmentConfig::apply_overrides(&mut settings, &env);
/// assert_eq!(settings.menu.theme.as_deref(), Some("flatui"));
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply every `RETROPATH_*` override present in `env`.
    ///
    /// A variable set to the empty string clears the corresponding value.
    pub fn apply_overrides(settings: &mut Settings, env: &dyn Environment) {
        let overrides: [(&str, &mut Option<String>); 7] = [
            (AUTOCONFIG_DIR_VAR, &mut settings.directory.autoconfig),
            (ASSETS_DIR_VAR, &mut settings.directory.assets),
            (MENU_CONFIG_DIR_VAR, &mut settings.directory.menu_config),
            (JOYPAD_DRIVER_VAR, &mut settings.input.joypad_driver),
            (MENU_WALLPAPER_VAR, &mut settings.path.menu_wallpaper),
            (XMB_FONT_VAR, &mut settings.path.xmb_font),
            (THEME_VAR, &mut settings.menu.theme),
        ];

        for (var, field) in overrides {
            if let Some(value) = env.var(var) {
                log::debug!("{var} overrides settings");
                *field = (!value.is_empty()).then_some(value);
            }
        }
    }

    /// Names of all recognized override variables.
    #[must_use]
    pub const fn variables() -> [&'static str; 7] {
        [
            AUTOCONFIG_DIR_VAR,
            ASSETS_DIR_VAR,
            MENU_CONFIG_DIR_VAR,
            JOYPAD_DRIVER_VAR,
            MENU_WALLPAPER_VAR,
            XMB_FONT_VAR,
            THEME_VAR,
        ]
    }
}
