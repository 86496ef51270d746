//! Special directories derived from settings.
//!
//! Each [`DirectoryKind`] names a purpose: the joypad autoconfig directory,
//! the menu-config directory, or one of a menu skin's asset paths. The kind's
//! [`Rule`] says how its path is composed from configured base directories,
//! optional overrides and other kinds.
//!
//! Kinds owned by a skin resolve to an empty path unless that skin is
//! enabled. The `xmb`, `materialui` and `zarch` cargo features choose the
//! default set; a resolver can be given any [`SkinSet`] at runtime.

pub mod kind;
pub mod resolver;
pub mod rule;

pub use kind::{DirectoryKind, Skin, SkinSet};
pub use resolver::SpecialDirectoryResolver;
pub use rule::{
    BaseDir, OverrideField, Rule, Segment, MATERIALUI_FONT_FILE, MAX_RULE_DEPTH,
    XMB_BACKGROUND_FILE, XMB_FONT_FILE, ZARCH_FONT_FILE,
};
