//! String-level path composition.
//!
//! These helpers work on `&str` rather than `Path` because portable paths
//! are stored and compared as text, and because the composed results are
//! written into capacity-bounded [`PathBuffer`](crate::PathBuffer)s.
//!
//! Separator recognition follows the platform: `/` everywhere, and `\` as
//! well on Windows.

use std::path::{is_separator, MAIN_SEPARATOR_STR};

/// The separator written when one has to be inserted.
pub const SEPARATOR: &str = MAIN_SEPARATOR_STR;

/// Whether `s` begins with a path separator.
#[must_use]
pub fn starts_with_separator(s: &str) -> bool {
    s.chars().next().is_some_and(is_separator)
}

/// Whether `s` ends with a path separator.
#[must_use]
pub fn ends_with_separator(s: &str) -> bool {
    s.chars().next_back().is_some_and(is_separator)
}

/// Strip every trailing separator.
///
/// The root `/` becomes the empty string; callers joining onto a root rely on
/// the remainder bringing its own leading separator.
#[must_use]
pub fn strip_trailing_separators(s: &str) -> &str {
    s.trim_end_matches(is_separator)
}

/// Join `component` onto `base`, writing exactly one separator between them.
///
/// An empty `base` yields `component` unchanged, and an empty `component`
/// yields `base` unchanged.
///
/// # Examples
///
/// ```
/// use retropath::path::join;
///
/// assert_eq!(join("/assets", "xmb"), "/assets/xmb");
/// assert_eq!(join("/assets/", "xmb"), "/assets/xmb");
/// assert_eq!(join("/assets", "/xmb"), "/assets/xmb");
/// assert_eq!(join("", "xmb"), "xmb");
/// assert_eq!(join("/assets", ""), "/assets");
/// ```
#[must_use]
pub fn join(base: &str, component: &str) -> String {
    if base.is_empty() {
        return component.to_owned();
    }
    if component.is_empty() {
        return base.to_owned();
    }

    let component = component.trim_start_matches(is_separator);
    let mut joined = String::with_capacity(base.len() + SEPARATOR.len() + component.len());
    joined.push_str(base);
    if !ends_with_separator(base) {
        joined.push_str(SEPARATOR);
    }
    joined.push_str(component);
    joined
}

/// Make `path` end in exactly one separator.
///
/// Idempotent. The empty string stays empty so that unresolved paths remain
/// recognisably unresolved.
///
/// # Examples
///
/// ```
/// use retropath::path::with_trailing_separator;
///
/// assert_eq!(with_trailing_separator("/assets/glui"), "/assets/glui/");
/// assert_eq!(with_trailing_separator("/assets/glui//"), "/assets/glui/");
/// assert_eq!(with_trailing_separator(""), "");
/// ```
#[must_use]
pub fn with_trailing_separator(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    let mut out = strip_trailing_separators(path).to_owned();
    out.push_str(SEPARATOR);
    out
}

/// Directory part of `path`, keeping its trailing separator.
///
/// A path without any separator lives in the current directory, reported as
/// `./`.
///
/// # Examples
///
/// ```
/// use retropath::path::basedir;
///
/// assert_eq!(basedir("/etc/retroarch.cfg"), "/etc/");
/// assert_eq!(basedir("retroarch.cfg"), "./");
/// ```
#[must_use]
pub fn basedir(path: &str) -> String {
    match path.rfind(is_separator) {
        Some(idx) => path[..=idx].to_owned(),
        None => format!(".{SEPARATOR}"),
    }
}

/// Containing directory of `path`, without a trailing separator.
///
/// Returns `None` when `path` has no separator. The parent of a top-level
/// entry such as `/retroarch` is the root itself.
///
/// # Examples
///
/// ```
/// use retropath::path::parent_dir;
///
/// assert_eq!(parent_dir("/opt/retroarch/retroarch"), Some("/opt/retroarch"));
/// assert_eq!(parent_dir("/retroarch"), Some("/"));
/// assert_eq!(parent_dir("retroarch"), None);
/// ```
#[must_use]
pub fn parent_dir(path: &str) -> Option<&str> {
    let idx = path.rfind(is_separator)?;
    let parent = strip_trailing_separators(&path[..idx]);
    if parent.is_empty() {
        Some(&path[..=idx])
    } else {
        Some(parent)
    }
}
