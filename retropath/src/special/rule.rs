//! Resolution rules for each directory kind.
//!
//! Rules refer to each other only through [`Rule::Derived::parent`], and the
//! resulting graph is acyclic with a depth far below [`MAX_RULE_DEPTH`].

use crate::config::ConfigProvider;
use crate::special::kind::DirectoryKind;

/// Deepest chain of parent rules the resolver follows.
pub const MAX_RULE_DEPTH: usize = 8;

/// XMB background image file name.
pub const XMB_BACKGROUND_FILE: &str = "bg.png";
/// XMB font file name.
pub const XMB_FONT_FILE: &str = "font.ttf";
/// MaterialUI font file name.
pub const MATERIALUI_FONT_FILE: &str = "Roboto-Regular.ttf";
/// Zarch font file name.
pub const ZARCH_FONT_FILE: &str = "Roboto-Condensed.ttf";

/// A configured base directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseDir {
    /// `directory.autoconfig`.
    Autoconfig,
    /// `directory.assets`.
    Assets,
}

impl BaseDir {
    /// The configured value; empty when unset.
    #[must_use]
    pub fn read(self, config: &dyn ConfigProvider) -> String {
        match self {
            Self::Autoconfig => config.autoconfig_directory(),
            Self::Assets => config.assets_directory(),
        }
    }
}

/// A path component appended to a base directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// A fixed name.
    Literal(&'static str),
    /// The active theme identifier.
    ThemeId,
    /// The active joypad driver.
    JoypadDriver,
}

impl Segment {
    /// The component text; empty when the configured value is unset.
    #[must_use]
    pub fn read(self, config: &dyn ConfigProvider) -> String {
        match self {
            Self::Literal(name) => name.to_owned(),
            Self::ThemeId => config.theme(),
            Self::JoypadDriver => config.joypad_driver(),
        }
    }
}

/// A configured value that replaces a derived path outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideField {
    /// `path.menu_wallpaper`.
    MenuWallpaper,
    /// `path.xmb_font`.
    XmbFont,
}

impl OverrideField {
    /// The configured value; empty when unset.
    #[must_use]
    pub fn read(self, config: &dyn ConfigProvider) -> String {
        match self {
            Self::MenuWallpaper => config.menu_wallpaper(),
            Self::XmbFont => config.xmb_font(),
        }
    }
}

/// How a directory kind is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// A configured base directory joined with segments.
    Join {
        /// The base directory.
        base: BaseDir,
        /// Segments appended in order; empty ones are skipped.
        segments: &'static [Segment],
    },
    /// An override if configured, otherwise the parent joined with a suffix.
    Derived {
        /// Value used verbatim when non-empty.
        override_field: Option<OverrideField>,
        /// Kind resolved when no override applies.
        parent: DirectoryKind,
        /// Component joined onto the parent.
        suffix: Option<&'static str>,
        /// Whether the result ends in exactly one separator.
        trailing_separator: bool,
    },
    /// The menu-config directory, else the directory of the active config file.
    ConfigDirectory,
    /// The per-user application data root.
    ApplicationData,
    /// Always resolves to an empty path.
    Unsupported,
}

const AUTOCONFIG_SEGMENTS: &[Segment] = &[Segment::JoypadDriver];
const XMB_SEGMENTS: &[Segment] = &[Segment::Literal("xmb"), Segment::ThemeId];
const MATERIALUI_SEGMENTS: &[Segment] = &[Segment::Literal("glui")];
const ZARCH_SEGMENTS: &[Segment] = &[Segment::Literal("zarch")];

impl Rule {
    /// The parent kind this rule recurses into, if any.
    #[must_use]
    pub const fn parent(self) -> Option<DirectoryKind> {
        match self {
            Self::Derived { parent, .. } => Some(parent),
            _ => None,
        }
    }
}

impl DirectoryKind {
    /// The rule resolving this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use retropath::special::{DirectoryKind, Rule};
    ///
    /// assert_eq!(DirectoryKind::XmbIcons.rule().parent(), Some(DirectoryKind::XmbAssets));
    /// assert_eq!(DirectoryKind::ZarchIcons.rule(), Rule::Unsupported);
    /// ```
    #[must_use]
    pub const fn rule(self) -> Rule {
        match self {
            Self::Autoconfig => Rule::Join {
                base: BaseDir::Autoconfig,
                segments: AUTOCONFIG_SEGMENTS,
            },
            Self::Config => Rule::ConfigDirectory,
            Self::ApplicationData => Rule::ApplicationData,
            Self::XmbAssets => Rule::Join {
                base: BaseDir::Assets,
                segments: XMB_SEGMENTS,
            },
            Self::XmbIcons => Rule::Derived {
                override_field: None,
                parent: Self::XmbAssets,
                suffix: Some("png"),
                trailing_separator: true,
            },
            Self::XmbBackground => Rule::Derived {
                override_field: Some(OverrideField::MenuWallpaper),
                parent: Self::XmbIcons,
                suffix: Some(XMB_BACKGROUND_FILE),
                trailing_separator: false,
            },
            Self::XmbFont => Rule::Derived {
                override_field: Some(OverrideField::XmbFont),
                parent: Self::XmbAssets,
                suffix: Some(XMB_FONT_FILE),
                trailing_separator: false,
            },
            Self::MaterialUiAssets => Rule::Join {
                base: BaseDir::Assets,
                segments: MATERIALUI_SEGMENTS,
            },
            Self::MaterialUiIcons => Rule::Derived {
                override_field: None,
                parent: Self::MaterialUiAssets,
                suffix: None,
                trailing_separator: true,
            },
            Self::MaterialUiFont => Rule::Derived {
                override_field: None,
                parent: Self::MaterialUiAssets,
                suffix: Some(MATERIALUI_FONT_FILE),
                trailing_separator: false,
            },
            Self::ZarchAssets => Rule::Join {
                base: BaseDir::Assets,
                segments: ZARCH_SEGMENTS,
            },
            Self::ZarchIcons => Rule::Unsupported,
            Self::ZarchFont => Rule::Derived {
                override_field: None,
                parent: Self::ZarchAssets,
                suffix: Some(ZARCH_FONT_FILE),
                trailing_separator: false,
            },
        }
    }

    /// Number of parent rules followed to resolve this kind.
    ///
    /// Returns `None` if the chain exceeds [`MAX_RULE_DEPTH`].
    #[must_use]
    pub fn rule_depth(self) -> Option<usize> {
        let mut kind = self;
        for depth in 0..=MAX_RULE_DEPTH {
            match kind.rule().parent() {
                Some(parent) => kind = parent,
                None => return Some(depth),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockConfigProvider;

    #[test]
    fn test_rule_graph_is_acyclic() {
        for kind in DirectoryKind::ALL {
            let depth = kind.rule_depth();
            assert!(
                depth.is_some_and(|d| d < MAX_RULE_DEPTH),
                "{kind} has depth {depth:?}"
            );
        }
    }

    #[test]
    fn test_deepest_chain() {
        assert_eq!(DirectoryKind::XmbBackground.rule_depth(), Some(2));
        assert_eq!(DirectoryKind::XmbAssets.rule_depth(), Some(0));
    }

    #[test]
    fn test_parents_share_skin() {
        for kind in DirectoryKind::ALL {
            if let Some(parent) = kind.rule().parent() {
                assert_eq!(kind.skin(), parent.skin(), "{kind} -> {parent}");
            }
        }
    }

    #[test]
    fn test_segments_read_provider() {
        let mut config = MockConfigProvider::new();
        config.expect_theme().return_const("flatui".to_string());
        config.expect_joypad_driver().return_const("udev".to_string());

        assert_eq!(Segment::Literal("xmb").read(&config), "xmb");
        assert_eq!(Segment::ThemeId.read(&config), "flatui");
        assert_eq!(Segment::JoypadDriver.read(&config), "udev");
    }

    #[test]
    fn test_override_fields_read_provider() {
        let mut config = MockConfigProvider::new();
        config
            .expect_menu_wallpaper()
            .return_const("/wall.png".to_string());
        config.expect_xmb_font().return_const(String::new());

        assert_eq!(OverrideField::MenuWallpaper.read(&config), "/wall.png");
        assert_eq!(OverrideField::XmbFont.read(&config), "");
    }
}
