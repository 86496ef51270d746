//! Directory kinds and the menu skins that own them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A purpose the resolver can produce a path for.
///
/// # Examples
///
/// ```
/// use retropath::special::DirectoryKind;
///
/// let kind: DirectoryKind = "xmb-icons".parse().unwrap();
/// assert_eq!(kind, DirectoryKind::XmbIcons);
/// assert_eq!(kind.to_string(), "xmb-icons");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectoryKind {
    /// Joypad autoconfig profiles for the active driver.
    Autoconfig,
    /// Directory for menu-saved configuration files.
    Config,
    /// Per-user application data root.
    ApplicationData,
    /// XMB assets for the active theme.
    XmbAssets,
    /// XMB icon directory.
    XmbIcons,
    /// XMB background image.
    XmbBackground,
    /// XMB font file.
    XmbFont,
    /// MaterialUI assets.
    #[serde(rename = "materialui-assets")]
    MaterialUiAssets,
    /// MaterialUI icon directory.
    #[serde(rename = "materialui-icons")]
    MaterialUiIcons,
    /// MaterialUI font file.
    #[serde(rename = "materialui-font")]
    MaterialUiFont,
    /// Zarch assets.
    ZarchAssets,
    /// Zarch icon directory. Zarch ships no icons.
    ZarchIcons,
    /// Zarch font file.
    ZarchFont,
}

impl DirectoryKind {
    /// Every kind, in display order.
    pub const ALL: [Self; 13] = [
        Self::Autoconfig,
        Self::Config,
        Self::ApplicationData,
        Self::XmbAssets,
        Self::XmbIcons,
        Self::XmbBackground,
        Self::XmbFont,
        Self::MaterialUiAssets,
        Self::MaterialUiIcons,
        Self::MaterialUiFont,
        Self::ZarchAssets,
        Self::ZarchIcons,
        Self::ZarchFont,
    ];

    /// Stable kebab-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Autoconfig => "autoconfig",
            Self::Config => "config",
            Self::ApplicationData => "application-data",
            Self::XmbAssets => "xmb-assets",
            Self::XmbIcons => "xmb-icons",
            Self::XmbBackground => "xmb-background",
            Self::XmbFont => "xmb-font",
            Self::MaterialUiAssets => "materialui-assets",
            Self::MaterialUiIcons => "materialui-icons",
            Self::MaterialUiFont => "materialui-font",
            Self::ZarchAssets => "zarch-assets",
            Self::ZarchIcons => "zarch-icons",
            Self::ZarchFont => "zarch-font",
        }
    }

    /// The skin owning this kind, if any.
    #[must_use]
    pub const fn skin(self) -> Option<Skin> {
        match self {
            Self::Autoconfig | Self::Config | Self::ApplicationData => None,
            Self::XmbAssets | Self::XmbIcons | Self::XmbBackground | Self::XmbFont => {
                Some(Skin::Xmb)
            }
            Self::MaterialUiAssets | Self::MaterialUiIcons | Self::MaterialUiFont => {
                Some(Skin::MaterialUi)
            }
            Self::ZarchAssets | Self::ZarchIcons | Self::ZarchFont => Some(Skin::Zarch),
        }
    }
}

impl fmt::Display for DirectoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DirectoryKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownKind { name: s.to_string() })
    }
}

/// A menu skin whose assets the resolver knows how to locate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skin {
    /// The cross-media bar menu.
    Xmb,
    /// The MaterialUI (glui) menu.
    MaterialUi,
    /// The Zarch menu.
    Zarch,
}

impl Skin {
    /// Every skin.
    pub const ALL: [Self; 3] = [Self::Xmb, Self::MaterialUi, Self::Zarch];

    /// Stable lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Xmb => "xmb",
            Self::MaterialUi => "materialui",
            Self::Zarch => "zarch",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::Xmb => 1,
            Self::MaterialUi => 1 << 1,
            Self::Zarch => 1 << 2,
        }
    }
}

impl fmt::Display for Skin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Skin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xmb" => Ok(Self::Xmb),
            "materialui" | "glui" => Ok(Self::MaterialUi),
            "zarch" => Ok(Self::Zarch),
            other => Err(Error::Validation {
                field: "skin".into(),
                message: format!("unknown skin '{other}'"),
            }),
        }
    }
}

/// The set of enabled skins.
///
/// # Examples
///
/// ```
/// use retropath::special::{Skin, SkinSet};
///
/// let skins: SkinSet = "xmb,zarch".parse().unwrap();
/// assert!(skins.contains(Skin::Xmb));
/// assert!(!skins.contains(Skin::MaterialUi));
/// assert_eq!(skins.to_string(), "xmb,zarch");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SkinSet(u8);

impl SkinSet {
    /// No skins.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every skin.
    #[must_use]
    pub const fn all() -> Self {
        Self::empty()
            .with(Skin::Xmb)
            .with(Skin::MaterialUi)
            .with(Skin::Zarch)
    }

    /// The skins enabled by cargo features.
    #[must_use]
    pub const fn compiled() -> Self {
        let mut set = Self::empty();
        if cfg!(feature = "xmb") {
            set = set.with(Skin::Xmb);
        }
        if cfg!(feature = "materialui") {
            set = set.with(Skin::MaterialUi);
        }
        if cfg!(feature = "zarch") {
            set = set.with(Skin::Zarch);
        }
        set
    }

    /// This set plus `skin`.
    #[must_use]
    pub const fn with(self, skin: Skin) -> Self {
        Self(self.0 | skin.bit())
    }

    /// This set minus `skin`.
    #[must_use]
    pub const fn without(self, skin: Skin) -> Self {
        Self(self.0 & !skin.bit())
    }

    /// Whether `skin` is enabled.
    #[must_use]
    pub const fn contains(self, skin: Skin) -> bool {
        self.0 & skin.bit() != 0
    }

    /// Whether no skin is enabled.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Enabled skins.
    pub fn iter(self) -> impl Iterator<Item = Skin> {
        Skin::ALL.into_iter().filter(move |skin| self.contains(*skin))
    }
}

impl FromIterator<Skin> for SkinSet {
    fn from_iter<I: IntoIterator<Item = Skin>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl fmt::Display for SkinSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.iter().map(Skin::name).collect();
        f.write_str(&names.join(","))
    }
}

/// Parses a comma-separated list; `all` and `none` are accepted.
impl FromStr for SkinSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "all" => Ok(Self::all()),
            "" | "none" => Ok(Self::empty()),
            list => list
                .split(',')
                .filter(|part| !part.trim().is_empty())
                .map(str::parse::<Skin>)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for kind in DirectoryKind::ALL {
            assert_eq!(kind.name().parse::<DirectoryKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = DirectoryKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DirectoryKind::ALL.len());
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "XMB-Font".parse::<DirectoryKind>().unwrap(),
            DirectoryKind::XmbFont
        );
    }

    #[test]
    fn test_unknown_kind() {
        let err = "sounds".parse::<DirectoryKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownKind { name } if name == "sounds"));
    }

    #[test]
    fn test_serde_matches_display() {
        for kind in DirectoryKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[test]
    fn test_skin_ownership() {
        assert_eq!(DirectoryKind::Config.skin(), None);
        assert_eq!(DirectoryKind::XmbBackground.skin(), Some(Skin::Xmb));
        assert_eq!(DirectoryKind::MaterialUiFont.skin(), Some(Skin::MaterialUi));
        assert_eq!(DirectoryKind::ZarchIcons.skin(), Some(Skin::Zarch));
    }

    #[test]
    fn test_skin_set_operations() {
        let set = SkinSet::empty().with(Skin::Xmb).with(Skin::Zarch);
        assert!(set.contains(Skin::Xmb));
        assert!(!set.contains(Skin::MaterialUi));
        assert_eq!(set.without(Skin::Xmb).iter().collect::<Vec<_>>(), vec![Skin::Zarch]);
        assert!(SkinSet::empty().is_empty());
        assert_eq!(SkinSet::all().iter().count(), 3);
    }

    #[test]
    fn test_skin_set_parse() {
        assert_eq!("all".parse::<SkinSet>().unwrap(), SkinSet::all());
        assert_eq!("none".parse::<SkinSet>().unwrap(), SkinSet::empty());
        assert_eq!(
            "glui, xmb".parse::<SkinSet>().unwrap(),
            SkinSet::empty().with(Skin::Xmb).with(Skin::MaterialUi)
        );
        assert!("xmb,rgui".parse::<SkinSet>().is_err());
    }

    #[test]
    #[cfg(all(feature = "xmb", feature = "materialui", feature = "zarch"))]
    fn test_default_features_compile_all_skins() {
        assert_eq!(SkinSet::compiled(), SkinSet::all());
    }
}
