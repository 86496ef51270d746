//! Per-user application data root.
//!
//! The data root is where an application keeps writable per-user state. Its
//! location follows an OS convention ([`DataConvention`]) and is derived from
//! environment variables only, independent of where the application binary
//! lives.

use std::fmt;

use crate::buffer::PathBuffer;
use crate::environment::Environment;
use crate::error::{Error, Result};
use crate::path::join;

/// Windows per-user roaming data variable.
pub const APPDATA_VAR: &str = "APPDATA";

/// XDG base directory variable for configuration.
pub const XDG_CONFIG_HOME_VAR: &str = "XDG_CONFIG_HOME";

/// Names an application for the data-root conventions.
///
/// # Examples
///
/// ```
/// use retropath::data::AppIdentity;
///
/// let identity = AppIdentity::default();
/// assert_eq!(identity.name, "retroarch");
/// assert_eq!(identity.display_name, "RetroArch");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    /// Canonical lowercase name, used in Unix-style paths.
    pub name: String,
    /// Display name, used where the OS convention is title case.
    pub display_name: String,
}

impl AppIdentity {
    /// Create an identity.
    #[must_use]
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
        }
    }
}

impl Default for AppIdentity {
    fn default() -> Self {
        Self::new("retroarch", "RetroArch")
    }
}

/// OS convention for the per-user data root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataConvention {
    /// `%APPDATA%`.
    Windows,
    /// `$HOME/Library/Application Support/<DisplayName>`.
    MacOs,
    /// `$XDG_CONFIG_HOME/<name>`, else `$HOME/.config/<name>/`.
    Xdg,
    /// `$XDG_CONFIG_HOME/<name>`, else `$HOME/config/settings/<name>/`.
    Haiku,
}

impl DataConvention {
    /// The convention of the build target.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "haiku") {
            Self::Haiku
        } else {
            Self::Xdg
        }
    }
}

impl fmt::Display for DataConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::MacOs => write!(f, "macos"),
            Self::Xdg => write!(f, "xdg"),
            Self::Haiku => write!(f, "haiku"),
        }
    }
}

/// Locates the per-user data root from environment signals.
///
/// # Examples
///
/// ```
/// use retropath::data::{ApplicationDataLocator, DataConvention};
/// use retropath::environment::FixedEnvironment;
///
/// let env = FixedEnvironment::new().with_home("/home/alice");
/// let locator = ApplicationDataLocator::new(&env).with_convention(DataConvention::Xdg);
///
/// assert_eq!(
///     locator.try_locate().as_deref(),
///     Some("/home/alice/.config/retroarch/")
/// );
/// ```
#[derive(Clone)]
pub struct ApplicationDataLocator<'a> {
    env: &'a dyn Environment,
    convention: DataConvention,
    identity: AppIdentity,
}

impl<'a> ApplicationDataLocator<'a> {
    /// A locator using the native convention and the default identity.
    #[must_use]
    pub fn new(env: &'a dyn Environment) -> Self {
        Self {
            env,
            convention: DataConvention::native(),
            identity: AppIdentity::default(),
        }
    }

    /// Use another convention.
    #[must_use]
    pub fn with_convention(mut self, convention: DataConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Use another application identity.
    #[must_use]
    pub fn with_identity(mut self, identity: AppIdentity) -> Self {
        self.identity = identity;
        self
    }

    /// The convention in use.
    #[must_use]
    pub const fn convention(&self) -> DataConvention {
        self.convention
    }

    /// Determine the data root, or `None` if no environment signal applies.
    #[must_use]
    pub fn try_locate(&self) -> Option<String> {
        let identity = &self.identity;
        match self.convention {
            DataConvention::Windows => self.env.non_empty_var(APPDATA_VAR),
            DataConvention::MacOs => self.env.home().map(|home| {
                join(
                    &home,
                    &format!("Library/Application Support/{}", identity.display_name),
                )
            }),
            DataConvention::Xdg => self.xdg_or_home(identity, ".config"),
            DataConvention::Haiku => self.xdg_or_home(identity, "config/settings"),
        }
    }

    // XDG_CONFIG_HOME itself defaults to a directory under HOME.
    fn xdg_or_home(&self, identity: &AppIdentity, home_subdir: &str) -> Option<String> {
        if let Some(xdg) = self.env.non_empty_var(XDG_CONFIG_HOME_VAR) {
            return Some(join(&xdg, &identity.name));
        }
        self.env
            .home()
            .map(|home| join(&home, &format!("{home_subdir}/{}/", identity.name)))
    }

    /// Write the data root into `out`.
    ///
    /// Returns `Ok(false)` and leaves `out` empty when no environment signal
    /// is present; the caller supplies its own default in that case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`](crate::Error::BufferTooSmall) if the
    /// data root does not fit `out`.
    pub fn locate(&self, out: &mut PathBuffer) -> Result<bool> {
        out.clear();
        match self.try_locate() {
            Some(root) => {
                log::debug!("Application data root {root} ({})", self.convention);
                out.set(&root)?;
                Ok(true)
            }
            None => {
                log::warn!(
                    "Cannot determine application data directory ({} convention)",
                    self.convention
                );
                Ok(false)
            }
        }
    }

    /// Like [`ApplicationDataLocator::locate`], failing when nothing is found.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotResolved`] if no environment signal applies,
    /// or [`Error::BufferTooSmall`] if the data root does not fit `out`.
    pub fn require(&self, out: &mut PathBuffer) -> Result<()> {
        if self.locate(out)? {
            Ok(())
        } else {
            Err(Error::PathNotResolved {
                what: "application data directory".into(),
            })
        }
    }
}

impl fmt::Debug for ApplicationDataLocator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationDataLocator")
            .field("convention", &self.convention)
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}
