//! Portable path notation.
//!
//! A portable path may start with a notation token standing for a
//! machine-specific directory:
//!
//! - `~`: the user's home directory
//! - `:` followed by a separator: the directory containing the running
//!   application
//!
//! [`PortablePathCodec`] expands such tokens into absolute paths and
//! abbreviates absolute paths back into token form, so paths saved in a
//! settings file keep working when the file moves to another machine or the
//! application is reinstalled elsewhere.

use std::fmt;

use crate::buffer::PathBuffer;
use crate::environment::Environment;
use crate::error::Result;
use crate::locator::{application_base_dir, ApplicationPathLocator};
use crate::path::join::{
    ends_with_separator, starts_with_separator, strip_trailing_separators, SEPARATOR,
};

/// A notation token at the start of a portable path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `~`, the home directory.
    Home,
    /// `:`, the application base directory.
    Application,
}

impl Notation {
    /// The token text.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Home => "~",
            Self::Application => ":",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Expands and abbreviates portable paths against two anchors.
///
/// Either anchor may be unknown. An unknown anchor is never substituted:
/// expansion leaves its token as literal text and abbreviation skips it.
///
/// Abbreviation matches an anchor as a literal prefix of the input, so with
/// home `/home/alice` the path `/home/alice2/saves` becomes `~/2/saves`.
/// [`with_boundary_only`](Self::with_boundary_only) restricts matches to
/// whole path components.
///
/// # Examples
///
/// ```
/// use retropath::{PathBuffer, PortablePathCodec};
///
/// let codec = PortablePathCodec::new(
///     Some("/home/alice".into()),
///     Some("/home/alice/retroarch".into()),
/// );
/// let mut buf = PathBuffer::default();
///
/// codec.expand("~/saves", &mut buf).unwrap();
/// assert_eq!(buf.as_str(), "/home/alice/saves");
///
/// codec.abbreviate("/home/alice/retroarch/cores", &mut buf).unwrap();
/// assert_eq!(buf.as_str(), ":/cores");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortablePathCodec {
    home: Option<String>,
    application_dir: Option<String>,
    boundary_only: bool,
}

impl PortablePathCodec {
    /// Create a codec from explicit anchors. Empty strings count as unknown.
    #[must_use]
    pub fn new(home: Option<String>, application_dir: Option<String>) -> Self {
        Self {
            home: home.filter(|h| !h.is_empty()),
            application_dir: application_dir.filter(|a| !a.is_empty()),
            boundary_only: false,
        }
    }

    /// Only abbreviate when an anchor ends on a component boundary.
    ///
    /// Off by default. When on, `/home/alice2/saves` is left alone against
    /// home `/home/alice`, which keeps `expand` an exact inverse of
    /// `abbreviate` for every input.
    #[must_use]
    pub const fn with_boundary_only(mut self, boundary_only: bool) -> Self {
        self.boundary_only = boundary_only;
        self
    }

    /// Whether abbreviation is restricted to component boundaries.
    #[must_use]
    pub const fn is_boundary_only(&self) -> bool {
        self.boundary_only
    }

    /// Create a codec whose anchors come from `env` and `locator`.
    ///
    /// The application anchor is the directory containing the located
    /// executable or bundle.
    #[must_use]
    pub fn from_environment(env: &dyn Environment, locator: &dyn ApplicationPathLocator) -> Self {
        Self::new(env.home(), application_base_dir(locator))
    }

    /// The home anchor, if known.
    #[must_use]
    pub fn home(&self) -> Option<&str> {
        self.home.as_deref()
    }

    /// The application base directory anchor, if known.
    #[must_use]
    pub fn application_dir(&self) -> Option<&str> {
        self.application_dir.as_deref()
    }

    /// The notation token `input` starts with, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use retropath::path::{Notation, PortablePathCodec};
    ///
    /// assert_eq!(PortablePathCodec::notation_of("~/saves"), Some(Notation::Home));
    /// assert_eq!(PortablePathCodec::notation_of(":/cores"), Some(Notation::Application));
    /// assert_eq!(PortablePathCodec::notation_of(":cores"), None);
    /// assert_eq!(PortablePathCodec::notation_of("/tmp"), None);
    /// ```
    #[must_use]
    pub fn notation_of(input: &str) -> Option<Notation> {
        if input.starts_with('~') {
            Some(Notation::Home)
        } else if input
            .strip_prefix(':')
            .is_some_and(starts_with_separator)
        {
            Some(Notation::Application)
        } else {
            None
        }
    }

    /// Whether `input` carries a notation token.
    #[must_use]
    pub fn is_portable(input: &str) -> bool {
        Self::notation_of(input).is_some()
    }

    fn anchor(&self, notation: Notation) -> Option<&str> {
        match notation {
            Notation::Home => self.home(),
            Notation::Application => self.application_dir(),
        }
    }

    /// Expand a leading notation token into its anchor directory.
    ///
    /// Paths without a token, and paths whose anchor is unknown, are copied
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`](crate::Error::BufferTooSmall) if the
    /// expanded path does not fit `out`; `out` is left empty.
    pub fn expand(&self, input: &str, out: &mut PathBuffer) -> Result<()> {
        let Some(notation) = Self::notation_of(input) else {
            return out.set(input);
        };
        let Some(anchor) = self.anchor(notation) else {
            return out.set(input);
        };

        // The remainder keeps the separator that followed the token, so the
        // anchor gives up its own trailing separators when one follows.
        let rest = &input[notation.token().len()..];
        let anchor = if starts_with_separator(rest) {
            strip_trailing_separators(anchor)
        } else {
            anchor
        };
        out.compose(&[anchor, rest])
    }

    /// Replace a leading anchor directory with its notation token.
    ///
    /// The application directory is tried before the home directory so an
    /// application installed inside the home directory keeps its `:` form.
    /// The first anchor that is a literal prefix of `input` is replaced, and
    /// a separator is inserted after the token when the remainder lacks one.
    /// At most one substitution happens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`](crate::Error::BufferTooSmall) if the
    /// abbreviated path does not fit `out`; `out` is left empty.
    pub fn abbreviate(&self, input: &str, out: &mut PathBuffer) -> Result<()> {
        for notation in [Notation::Application, Notation::Home] {
            let Some(anchor) = self.anchor(notation) else {
                continue;
            };
            let Some(rest) = input.strip_prefix(anchor) else {
                continue;
            };
            if self.boundary_only
                && !ends_with_separator(anchor)
                && !rest.is_empty()
                && !starts_with_separator(rest)
            {
                continue;
            }

            let separator = if starts_with_separator(rest) {
                ""
            } else {
                SEPARATOR
            };
            return out.compose(&[notation.token(), separator, rest]);
        }

        out.set(input)
    }
}
