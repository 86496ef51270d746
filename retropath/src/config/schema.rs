//! Settings schema definitions.
//!
//! This module defines the settings snapshot the special directory resolver
//! reads: base directories, path overrides, the joypad driver and the active
//! menu theme.

use serde::{Deserialize, Serialize};

use crate::buffer::PathBuffer;
use crate::error::Result;
use crate::path::PortablePathCodec;

/// Theme used when none is configured.
pub const DEFAULT_THEME: &str = "monochrome";

/// Complete settings snapshot.
///
/// Every field is optional; an absent or empty value means "not configured".
///
/// # Examples
///
/// ```
/// use retropath::config::{DirectorySettings, Settings};
///
/// let settings = Settings {
///     directory: DirectorySettings {
///         assets: Some(":/assets".to_string()),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// assert_eq!(settings.directory.assets.as_deref(), Some(":/assets"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Base directories.
    #[serde(default)]
    pub directory: DirectorySettings,

    /// Individual file overrides.
    #[serde(default)]
    pub path: PathSettings,

    /// Input settings.
    #[serde(default)]
    pub input: InputSettings,

    /// Menu settings.
    #[serde(default)]
    pub menu: MenuSettings,
}

/// Configured base directories.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DirectorySettings {
    /// Root of the joypad autoconfig profiles.
    pub autoconfig: Option<String>,

    /// Root of the menu assets.
    pub assets: Option<String>,

    /// Directory for menu-saved configuration files.
    pub menu_config: Option<String>,
}

/// Configured file overrides.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PathSettings {
    /// Menu wallpaper image, replacing the theme background.
    pub menu_wallpaper: Option<String>,

    /// Font for the XMB menu, replacing the theme font.
    pub xmb_font: Option<String>,

    /// The configuration file currently in use.
    pub config: Option<String>,
}

/// Input settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InputSettings {
    /// Active joypad driver (e.g. `udev`, `xinput`).
    pub joypad_driver: Option<String>,
}

/// Menu settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MenuSettings {
    /// Active theme identifier (e.g. `monochrome`, `flatui`).
    pub theme: Option<String>,
}

impl Settings {
    /// Names and values of every field holding a path.
    #[must_use]
    pub fn path_fields(&self) -> [(&'static str, Option<&str>); 6] {
        [
            ("directory.autoconfig", self.directory.autoconfig.as_deref()),
            ("directory.assets", self.directory.assets.as_deref()),
            ("directory.menu_config", self.directory.menu_config.as_deref()),
            ("path.menu_wallpaper", self.path.menu_wallpaper.as_deref()),
            ("path.xmb_font", self.path.xmb_font.as_deref()),
            ("path.config", self.path.config.as_deref()),
        ]
    }

    fn path_fields_mut(&mut self) -> [&mut Option<String>; 6] {
        [
            &mut self.directory.autoconfig,
            &mut self.directory.assets,
            &mut self.directory.menu_config,
            &mut self.path.menu_wallpaper,
            &mut self.path.xmb_font,
            &mut self.path.config,
        ]
    }

    /// Active theme, falling back to [`DEFAULT_THEME`].
    #[must_use]
    pub fn theme_or_default(&self) -> &str {
        self.menu
            .theme
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_THEME)
    }

    /// A copy with every `~` and `:` token in path fields expanded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`](crate::Error::BufferTooSmall) if an
    /// expanded path does not fit `capacity`.
    ///
    /// # Examples
    ///
    /// ```
    /// use retropath::config::Settings;
    /// use retropath::PortablePathCodec;
    ///
    /// let mut settings = Settings::default();
    /// settings.directory.assets = Some(":/assets".to_string());
    /// settings.path.xmb_font = Some("~/fonts/menu.ttf".to_string());
    ///
    /// let codec = PortablePathCodec::new(Some("/home/alice".into()), Some("/opt/ra".into()));
    /// let expanded = settings.expand_portable(&codec, 4096).unwrap();
    ///
    /// assert_eq!(expanded.directory.assets.as_deref(), Some("/opt/ra/assets"));
    /// assert_eq!(expanded.path.xmb_font.as_deref(), Some("/home/alice/fonts/menu.ttf"));
    /// ```
    pub fn expand_portable(&self, codec: &PortablePathCodec, capacity: usize) -> Result<Self> {
        let mut expanded = self.clone();
        let mut buf = PathBuffer::new(capacity);
        for field in expanded.path_fields_mut() {
            if let Some(value) = field.as_mut() {
                codec.expand(value, &mut buf)?;
                value.clear();
                value.push_str(buf.as_str());
            }
        }
        Ok(expanded)
    }

    /// A copy with every path field abbreviated into portable form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`](crate::Error::BufferTooSmall) if an
    /// abbreviated path does not fit `capacity`.
    pub fn abbreviate_portable(&self, codec: &PortablePathCodec, capacity: usize) -> Result<Self> {
        let mut abbreviated = self.clone();
        let mut buf = PathBuffer::new(capacity);
        for field in abbreviated.path_fields_mut() {
            if let Some(value) = field.as_mut() {
                codec.abbreviate(value, &mut buf)?;
                value.clear();
                value.push_str(buf.as_str());
            }
        }
        Ok(abbreviated)
    }
}
